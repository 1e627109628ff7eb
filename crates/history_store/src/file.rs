use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use history_core::{ExportArtifact, HistoryEntry, HistoryStore, StoreError};
use history_logging::{history_debug, history_info, history_warn};
use serde::{Deserialize, Serialize};

use crate::export::export_records;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::record::{RecordList, StoreSettings, StoredRecord};

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedHistory {
    records: Vec<StoredRecord>,
}

/// History persisted as a JSON document, rewritten atomically after every
/// change.
pub struct FileHistoryStore {
    path: PathBuf,
    records: RecordList,
    settings: StoreSettings,
}

impl FileHistoryStore {
    /// Opens the history at `path`. A missing file is an empty history; a
    /// malformed one is an error so it is never silently overwritten.
    pub fn open(path: impl Into<PathBuf>, settings: StoreSettings) -> Result<Self, PersistError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<PersistedHistory>(&text)?.records,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                history_debug!("No history at {:?}; starting empty", path);
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };
        history_info!("Loaded {} history records from {:?}", records.len(), path);
        Ok(Self {
            path,
            records: RecordList::from_records(records),
            settings,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[StoredRecord] {
        self.records.records()
    }

    pub fn add(&mut self, record: StoredRecord) -> Result<(), PersistError> {
        self.records.add(record, &self.settings);
        self.save()
    }

    /// Records a scan stamped with the configured clock.
    pub fn add_scan(
        &mut self,
        text: impl Into<String>,
        format: impl Into<String>,
    ) -> Result<(), PersistError> {
        let now = (self.settings.now_millis)();
        self.add(StoredRecord::new(text, format, now))
    }

    fn save(&self) -> Result<(), PersistError> {
        let document = PersistedHistory {
            records: self.records.records().to_vec(),
        };
        let content = serde_json::to_vec_pretty(&document)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let filename = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PersistError::Directory(format!("bad history path {:?}", self.path)))?;
        AtomicFileWriter::new(dir).write(filename, &content)?;
        Ok(())
    }
}

impl HistoryStore for FileHistoryStore {
    fn fetch_all(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.records.entries())
    }

    fn delete_at(&mut self, position: usize) -> Result<(), StoreError> {
        if !self.records.delete_at(position) {
            history_warn!("Ignoring delete of missing history position {}", position);
            return Ok(());
        }
        Ok(self.save()?)
    }

    fn clear_all(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        Ok(self.save()?)
    }

    fn export_as_artifact(&self) -> Result<Option<ExportArtifact>, StoreError> {
        Ok(export_records(&self.settings, self.records.records()))
    }

    fn has_entries(&self) -> Result<bool, StoreError> {
        Ok(!self.records.is_empty())
    }
}
