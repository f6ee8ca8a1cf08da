use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::models::history::HistoryRecord;
use crate::state::AppState;

/// GET /api/v1/history
pub async fn handle_list(State(state): State<AppState>) -> Json<Vec<HistoryRecord>> {
    Json(state.store.list())
}

/// DELETE /api/v1/history/:id
///
/// Returns the updated sequence. Deleting never changes the session view.
pub async fn handle_remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<Vec<HistoryRecord>> {
    Json(state.store.remove(id))
}

/// DELETE /api/v1/history
pub async fn handle_clear(State(state): State<AppState>) -> StatusCode {
    state.store.clear();
    StatusCode::NO_CONTENT
}
