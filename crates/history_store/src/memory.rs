use history_core::{ExportArtifact, HistoryEntry, HistoryStore, StoreError};
use history_logging::history_warn;

use crate::export::export_records;
use crate::record::{RecordList, StoreSettings, StoredRecord};

/// History kept only in memory; exports still go to disk when an export
/// directory is configured.
#[derive(Clone, Default)]
pub struct MemoryHistoryStore {
    records: RecordList,
    settings: StoreSettings,
}

impl MemoryHistoryStore {
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            records: RecordList::default(),
            settings,
        }
    }

    pub fn with_records(settings: StoreSettings, records: Vec<StoredRecord>) -> Self {
        Self {
            records: RecordList::from_records(records),
            settings,
        }
    }

    pub fn add(&mut self, record: StoredRecord) {
        self.records.add(record, &self.settings);
    }

    /// Records a scan stamped with the configured clock.
    pub fn add_scan(&mut self, text: impl Into<String>, format: impl Into<String>) {
        let now = (self.settings.now_millis)();
        self.add(StoredRecord::new(text, format, now));
    }

    pub fn records(&self) -> &[StoredRecord] {
        self.records.records()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn fetch_all(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.records.entries())
    }

    fn delete_at(&mut self, position: usize) -> Result<(), StoreError> {
        if !self.records.delete_at(position) {
            history_warn!("Ignoring delete of missing history position {}", position);
        }
        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        Ok(())
    }

    fn export_as_artifact(&self) -> Result<Option<ExportArtifact>, StoreError> {
        Ok(export_records(&self.settings, self.records.records()))
    }

    fn has_entries(&self) -> Result<bool, StoreError> {
        Ok(!self.records.is_empty())
    }
}
