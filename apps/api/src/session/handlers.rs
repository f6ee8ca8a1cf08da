use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::report::AnalysisReport;
use crate::session::{Session, View};
use crate::state::AppState;

/// Wire shape for GET /api/v1/session and every transition endpoint.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub view: View,
    pub busy: bool,
    pub report: Option<AnalysisReport>,
}

fn snapshot(session: &Session) -> SessionSnapshot {
    SessionSnapshot {
        view: session.view(),
        busy: session.is_busy(),
        report: session.current_report().cloned(),
    }
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(snapshot(&session))
}

/// POST /api/v1/session/reset
pub async fn handle_reset(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = state.session.lock().await;
    session.reset()?;
    Ok(Json(snapshot(&session)))
}

/// POST /api/v1/session/history
pub async fn handle_open_history(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = state.session.lock().await;
    session.open_history()?;
    Ok(Json(snapshot(&session)))
}

/// POST /api/v1/session/back
pub async fn handle_back(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = state.session.lock().await;
    session.back()?;
    Ok(Json(snapshot(&session)))
}

/// POST /api/v1/session/select/:id
///
/// Loads a stored record's report into the session without contacting the
/// evaluator.
pub async fn handle_select(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let record = state
        .store
        .list()
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(format!("history record {id} not found")))?;

    let mut session = state.session.lock().await;
    session.select(record.result)?;
    Ok(Json(snapshot(&session)))
}
