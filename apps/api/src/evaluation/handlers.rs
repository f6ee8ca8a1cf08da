//! Submission flow: validate → reserve the session → evaluate → persist →
//! complete.
//!
//! The evaluate await is the only suspension point. The busy flag, not the
//! session lock, excludes concurrent submissions: the lock is held only to
//! flip state, so a re-entrant submit gets rejected instead of queueing
//! behind the in-flight one.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::evaluation::evaluator::evaluate;
use crate::models::form::FormInput;
use crate::models::history::HistoryRecord;
use crate::state::AppState;

/// POST /api/v1/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(input): Json<FormInput>,
) -> Result<Json<HistoryRecord>, AppError> {
    let record = submit(&state, input).await?;
    Ok(Json(record))
}

/// Runs one full submission. Separated from the handler so the flow is
/// testable without HTTP plumbing.
pub async fn submit(state: &AppState, input: FormInput) -> Result<HistoryRecord, AppError> {
    input.validate().map_err(AppError::Validation)?;

    state.session.lock().await.begin_submit()?;

    // Infallible from here on: evaluate resolves failures to a fallback
    // report and the store swallows write errors, so complete_submit always
    // runs and the busy flag cannot stick.
    let report = evaluate(&state.config, state.chat.as_ref(), &input).await;
    let record = state.store.append(&input, &report);

    state.session.lock().await.complete_submit(report);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    use super::*;
    use crate::config::Config;
    use crate::history::HistoryStore;
    use crate::llm_client::{ChatCompletion, LlmError};
    use crate::session::{Session, View};

    struct CountingChat {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChatCompletion for CountingChat {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(LlmError::Api {
                status: 500,
                message: "not under test".to_string(),
            })
        }
    }

    fn test_state(dir: &TempDir, api_key: Option<&str>) -> (AppState, Arc<CountingChat>) {
        let chat = Arc::new(CountingChat {
            calls: AtomicUsize::new(0),
        });
        let config = Config {
            api_key: api_key.map(str::to_string),
            api_base_url: crate::llm_client::DEFAULT_BASE_URL.to_string(),
            api_model: crate::llm_client::DEFAULT_MODEL.to_string(),
            history_path: dir.path().join("history.json"),
            port: 8080,
            rust_log: "info".to_string(),
        };
        let state = AppState {
            chat: chat.clone(),
            store: HistoryStore::new(config.history_path.clone()),
            session: Arc::new(Mutex::new(Session::new())),
            config,
        };
        (state, chat)
    }

    #[tokio::test]
    async fn test_submit_without_credential_end_to_end() {
        let dir = TempDir::new().unwrap();
        let (state, chat) = test_state(&dir, None);
        let before = state.store.list().len();

        let record = submit(&state, FormInput::sample()).await.unwrap();

        assert_eq!(record.result.score, 0);
        assert_eq!(record.result.tier, "系统故障");
        assert_eq!(record.form_data.position, "产品经理");
        assert_eq!(chat.calls.load(Ordering::SeqCst), 0);
        assert_eq!(state.store.list().len(), before + 1);

        let session = state.session.lock().await;
        assert_eq!(session.view(), View::Result);
        assert!(!session.is_busy());
        assert_eq!(session.current_report().unwrap().score, 0);
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_before_any_side_effect() {
        let dir = TempDir::new().unwrap();
        let (state, chat) = test_state(&dir, Some("sk-test"));

        let mut input = FormInput::sample();
        input.city = String::new();
        let err = submit(&state, input).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(chat.calls.load(Ordering::SeqCst), 0);
        assert!(state.store.list().is_empty());
        assert_eq!(state.session.lock().await.view(), View::Input);
    }

    #[tokio::test]
    async fn test_reentrant_submit_is_rejected_while_busy() {
        let dir = TempDir::new().unwrap();
        let (state, chat) = test_state(&dir, None);

        state.session.lock().await.begin_submit().unwrap();

        let err = submit(&state, FormInput::sample()).await.unwrap_err();
        assert!(matches!(err, AppError::Busy));
        assert_eq!(chat.calls.load(Ordering::SeqCst), 0);
        assert!(state.store.list().is_empty());
    }

    #[tokio::test]
    async fn test_two_sequential_submits_produce_two_records() {
        let dir = TempDir::new().unwrap();
        let (state, _) = test_state(&dir, None);

        let first = submit(&state, FormInput::sample()).await.unwrap();
        state.session.lock().await.reset().unwrap();
        let second = submit(&state, FormInput::sample()).await.unwrap();

        assert_ne!(first.id, second.id);
        let records = state.store.list();
        assert_eq!(records.len(), 2);
        // Newest first
        assert_eq!(records[0].id, second.id);
        assert_eq!(records[1].id, first.id);
    }
}
