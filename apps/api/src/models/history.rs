use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::form::FormInput;
use crate::models::report::AnalysisReport;

/// A persisted (input, report) pair. Immutable once created, except for
/// deletion by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: Uuid,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
    pub form_data: FormInput,
    pub result: AnalysisReport,
}

impl HistoryRecord {
    pub fn new(form_data: FormInput, result: AnalysisReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now().timestamp_millis(),
            form_data,
            result,
        }
    }
}
