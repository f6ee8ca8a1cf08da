pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::evaluation::handlers as evaluation;
use crate::history::handlers as history;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/evaluate", post(evaluation::handle_evaluate))
        .route("/api/v1/session", get(session::handle_get_session))
        .route("/api/v1/session/reset", post(session::handle_reset))
        .route("/api/v1/session/history", post(session::handle_open_history))
        .route("/api/v1/session/back", post(session::handle_back))
        .route("/api/v1/session/select/:id", post(session::handle_select))
        .route(
            "/api/v1/history",
            get(history::handle_list).delete(history::handle_clear),
        )
        .route("/api/v1/history/:id", delete(history::handle_remove))
        .with_state(state)
}
