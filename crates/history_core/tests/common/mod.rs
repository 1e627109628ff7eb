#![allow(dead_code)]

use std::cell::Cell;
use std::path::PathBuf;
use std::sync::Once;

use history_core::{ExportArtifact, HistoryEntry, HistoryStore, StoreError};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(history_logging::initialize_for_tests);
}

pub fn entry(text: &str) -> HistoryEntry {
    HistoryEntry::new(
        text,
        Some("2024-05-01 12:00:00".to_string()),
        Some("QR_CODE".to_string()),
    )
}

/// In-test store that records how it was called.
#[derive(Default)]
pub struct RecordingStore {
    pub entries: Vec<HistoryEntry>,
    pub fetch_calls: Cell<usize>,
    pub deleted_positions: Vec<usize>,
    pub clear_calls: usize,
    pub export_available: bool,
    pub fail_fetch: bool,
}

impl RecordingStore {
    pub fn with(texts: &[&str]) -> Self {
        Self {
            entries: texts.iter().map(|text| entry(text)).collect(),
            export_available: true,
            ..Self::default()
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|e| e.content().map(str::to_string))
            .collect()
    }
}

impl HistoryStore for RecordingStore {
    fn fetch_all(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        if self.fail_fetch {
            return Err(StoreError::Unavailable("fetch disabled".to_string()));
        }
        Ok(self.entries.clone())
    }

    fn delete_at(&mut self, position: usize) -> Result<(), StoreError> {
        self.deleted_positions.push(position);
        if position < self.entries.len() {
            self.entries.remove(position);
        }
        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), StoreError> {
        self.clear_calls += 1;
        self.entries.clear();
        Ok(())
    }

    fn export_as_artifact(&self) -> Result<Option<ExportArtifact>, StoreError> {
        if !self.export_available {
            return Ok(None);
        }
        Ok(Some(ExportArtifact {
            path: PathBuf::from("/tmp/history-1.csv"),
            mime_type: "text/csv".to_string(),
            entry_count: self.entries.len(),
        }))
    }

    fn has_entries(&self) -> Result<bool, StoreError> {
        Ok(!self.entries.is_empty())
    }
}
