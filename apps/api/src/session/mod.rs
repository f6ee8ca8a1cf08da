//! Session state machine: input → result → history transitions with a busy
//! flag guarding the single in-flight evaluation.
//!
//! The machine is a plain synchronous object so every transition rule is
//! unit-testable without the HTTP layer or the evaluator.

pub mod handlers;

use serde::Serialize;
use thiserror::Error;

use crate::models::report::AnalysisReport;

/// Current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Input,
    Result,
    History,
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("an evaluation is already in flight")]
    Busy,

    #[error("{action} is not valid in the {from:?} view")]
    InvalidTransition { from: View, action: &'static str },
}

/// Explicit session object owning the view, the busy flag, and the loaded
/// report. Initial state: `Input`, idle, nothing loaded. There is no
/// terminal state.
#[derive(Debug)]
pub struct Session {
    view: View,
    busy: bool,
    current: Option<AnalysisReport>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: View::Input,
            busy: false,
            current: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn current_report(&self) -> Option<&AnalysisReport> {
        self.current.as_ref()
    }

    /// Reserves the session for one evaluation. Re-entrant submissions are
    /// rejected, not queued.
    pub fn begin_submit(&mut self) -> Result<(), SessionError> {
        self.guard(View::Input, "submit")?;
        self.busy = true;
        Ok(())
    }

    /// Completion of the pending evaluation, the only valid step while
    /// busy. Runs for success and fallback reports alike; there is no
    /// failed-submit transition because the evaluator cannot fail.
    pub fn complete_submit(&mut self, report: AnalysisReport) {
        self.current = Some(report);
        self.busy = false;
        self.view = View::Result;
    }

    /// Result → Input, discarding the loaded report.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.guard(View::Result, "reset")?;
        self.view = View::Input;
        self.current = None;
        Ok(())
    }

    /// Input/Result → History.
    pub fn open_history(&mut self) -> Result<(), SessionError> {
        if self.busy {
            return Err(SessionError::Busy);
        }
        if self.view == View::History {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                action: "open history",
            });
        }
        self.view = View::History;
        Ok(())
    }

    /// History → Result if a report is loaded, else Input.
    pub fn back(&mut self) -> Result<(), SessionError> {
        self.guard(View::History, "back")?;
        self.view = if self.current.is_some() {
            View::Result
        } else {
            View::Input
        };
        Ok(())
    }

    /// Loads a stored report, History → Result, without re-evaluating.
    pub fn select(&mut self, report: AnalysisReport) -> Result<(), SessionError> {
        self.guard(View::History, "select")?;
        self.current = Some(report);
        self.view = View::Result;
        Ok(())
    }

    fn guard(&self, expected: View, action: &'static str) -> Result<(), SessionError> {
        if self.busy {
            return Err(SessionError::Busy);
        }
        if self.view != expected {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                action,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::evaluator::fallback_report;

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.view(), View::Input);
        assert!(!session.is_busy());
        assert!(session.current_report().is_none());
    }

    #[test]
    fn test_submit_completes_into_result() {
        let mut session = Session::new();
        session.begin_submit().unwrap();
        assert!(session.is_busy());
        assert_eq!(session.view(), View::Input);

        session.complete_submit(fallback_report("x"));
        assert!(!session.is_busy());
        assert_eq!(session.view(), View::Result);
        assert!(session.current_report().is_some());
    }

    #[test]
    fn test_no_transition_is_valid_while_busy() {
        let mut session = Session::new();
        session.begin_submit().unwrap();

        assert_eq!(session.begin_submit(), Err(SessionError::Busy));
        assert_eq!(session.reset(), Err(SessionError::Busy));
        assert_eq!(session.open_history(), Err(SessionError::Busy));
        assert_eq!(session.back(), Err(SessionError::Busy));
        assert_eq!(session.select(fallback_report("x")), Err(SessionError::Busy));
    }

    #[test]
    fn test_submit_only_valid_from_input() {
        let mut session = Session::new();
        session.begin_submit().unwrap();
        session.complete_submit(fallback_report("x"));

        let err = session.begin_submit().unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidTransition {
                from: View::Result,
                ..
            }
        ));
    }

    #[test]
    fn test_reset_returns_to_input_and_drops_report() {
        let mut session = Session::new();
        session.begin_submit().unwrap();
        session.complete_submit(fallback_report("x"));

        session.reset().unwrap();
        assert_eq!(session.view(), View::Input);
        assert!(session.current_report().is_none());
    }

    #[test]
    fn test_reset_invalid_from_input_and_history() {
        let mut session = Session::new();
        assert!(session.reset().is_err());

        session.open_history().unwrap();
        assert!(session.reset().is_err());
    }

    #[test]
    fn test_open_history_from_input_and_result() {
        let mut session = Session::new();
        session.open_history().unwrap();
        assert_eq!(session.view(), View::History);

        let mut session = Session::new();
        session.begin_submit().unwrap();
        session.complete_submit(fallback_report("x"));
        session.open_history().unwrap();
        assert_eq!(session.view(), View::History);
    }

    #[test]
    fn test_open_history_invalid_when_already_there() {
        let mut session = Session::new();
        session.open_history().unwrap();
        assert!(session.open_history().is_err());
    }

    #[test]
    fn test_back_branches_on_loaded_report() {
        // Nothing loaded → Input
        let mut session = Session::new();
        session.open_history().unwrap();
        session.back().unwrap();
        assert_eq!(session.view(), View::Input);

        // Report loaded → Result
        let mut session = Session::new();
        session.begin_submit().unwrap();
        session.complete_submit(fallback_report("x"));
        session.open_history().unwrap();
        session.back().unwrap();
        assert_eq!(session.view(), View::Result);
        assert!(session.current_report().is_some());
    }

    #[test]
    fn test_select_loads_report_into_result() {
        let mut session = Session::new();
        session.open_history().unwrap();

        let mut report = fallback_report("x");
        report.score = 88;
        session.select(report).unwrap();

        assert_eq!(session.view(), View::Result);
        assert_eq!(session.current_report().unwrap().score, 88);
    }

    #[test]
    fn test_select_invalid_outside_history() {
        let mut session = Session::new();
        assert!(session.select(fallback_report("x")).is_err());
    }

    #[test]
    fn test_view_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&View::Input).unwrap(), "\"input\"");
        assert_eq!(serde_json::to_string(&View::History).unwrap(), "\"history\"");
    }
}
