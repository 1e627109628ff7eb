use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use history_core::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Format used for the human-readable timestamp column.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One persisted scan result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub text: String,
    pub format: String,
    pub timestamp_millis: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl StoredRecord {
    pub fn new(text: impl Into<String>, format: impl Into<String>, timestamp_millis: i64) -> Self {
        Self {
            text: text.into(),
            format: format.into(),
            timestamp_millis,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn display_timestamp(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp_millis)
            .map(|at| at.format(DISPLAY_TIME_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn to_entry(&self) -> HistoryEntry {
        HistoryEntry::new(
            self.text.clone(),
            Some(self.display_timestamp()),
            Some(self.format.clone()),
        )
    }
}

/// Milliseconds since the Unix epoch.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

#[derive(Clone)]
pub struct StoreSettings {
    /// Oldest records beyond this count are dropped on insert.
    pub max_entries: usize,
    /// When false, a new scan replaces an older record with the same text.
    pub remember_duplicates: bool,
    /// Where exports are written; `None` means exporting is unavailable.
    pub export_dir: Option<PathBuf>,
    pub now_millis: Clock,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            max_entries: 2000,
            remember_duplicates: false,
            export_dir: None,
            now_millis: Arc::new(|| Utc::now().timestamp_millis()),
        }
    }
}

/// Most-recent-first record list shared by the store implementations.
#[derive(Clone, Default)]
pub(crate) struct RecordList {
    records: Vec<StoredRecord>,
}

impl RecordList {
    pub(crate) fn from_records(mut records: Vec<StoredRecord>) -> Self {
        records.sort_by(|a, b| b.timestamp_millis.cmp(&a.timestamp_millis));
        Self { records }
    }

    pub(crate) fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    pub(crate) fn entries(&self) -> Vec<HistoryEntry> {
        self.records.iter().map(StoredRecord::to_entry).collect()
    }

    pub(crate) fn add(&mut self, record: StoredRecord, settings: &StoreSettings) {
        if !settings.remember_duplicates {
            self.records.retain(|existing| existing.text != record.text);
        }
        self.records.insert(0, record);
        self.records.truncate(settings.max_entries);
    }

    pub(crate) fn delete_at(&mut self, position: usize) -> bool {
        if position >= self.records.len() {
            return false;
        }
        self.records.remove(position);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
