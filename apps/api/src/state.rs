use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::history::HistoryStore;
use crate::llm_client::ChatCompletion;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream chat seam. Production wires a `ChatClient`; tests substitute
    /// a scripted stub.
    pub chat: Arc<dyn ChatCompletion>,
    pub store: HistoryStore,
    /// The single user session. The lock is held only to flip state, never
    /// across the evaluate await.
    pub session: Arc<Mutex<Session>>,
    pub config: Config,
}
