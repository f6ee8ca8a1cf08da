//! File-backed history store — the sole owner of persisted records.
//!
//! The whole sequence is rewritten on every mutation and nothing is cached
//! in memory, so `list()` after a mutation is the single source of truth.
//! Persistence failures never propagate: reads degrade to empty, writes are
//! best-effort. Concurrent processes on the same file are last-writer-wins.

pub mod handlers;

use std::fs;
use std::path::PathBuf;

use tracing::warn;
use uuid::Uuid;

use crate::models::form::FormInput;
use crate::models::history::HistoryRecord;
use crate::models::report::AnalysisReport;

/// Persisted layout: a JSON array of `HistoryRecord`, newest first, no
/// version field (layout-compatible with the original web client's storage).
#[derive(Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a store over `path`. The parent directory is created eagerly
    /// so later writes only touch the one file.
    pub fn new(path: PathBuf) -> Self {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(
                    "could not create history directory {}: {e}",
                    parent.display()
                );
            }
        }
        Self { path }
    }

    /// All records, newest first. Missing or corrupt storage reads as empty.
    pub fn list(&self) -> Vec<HistoryRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!("history file corrupt, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Prepends a fresh record and rewrites the file. The record is returned
    /// even if the write fails; callers must not block on persistence.
    pub fn append(&self, input: &FormInput, report: &AnalysisReport) -> HistoryRecord {
        let record = HistoryRecord::new(input.clone(), report.clone());
        let mut records = self.list();
        records.insert(0, record.clone());
        self.write(&records);
        record
    }

    /// Drops the record with `id`, rewrites, and returns what remains.
    pub fn remove(&self, id: Uuid) -> Vec<HistoryRecord> {
        let records: Vec<HistoryRecord> =
            self.list().into_iter().filter(|r| r.id != id).collect();
        self.write(&records);
        records
    }

    /// Deletes all persisted state.
    pub fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("could not clear history file: {e}");
            }
        }
    }

    fn write(&self, records: &[HistoryRecord]) {
        let content = match serde_json::to_string(records) {
            Ok(c) => c,
            Err(e) => {
                warn!("could not serialize history: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, content) {
            warn!("could not write history file {}: {e}", self.path.display());
        }
    }
}
