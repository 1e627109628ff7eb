//! Collaborator contracts: the backing store and the share facility.
use std::path::PathBuf;

use thiserror::Error;

use crate::HistoryEntry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("history store unavailable: {0}")]
    Unavailable(String),
    #[error("history store io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A serialized copy of the whole history, ready to hand to a share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub path: PathBuf,
    pub mime_type: String,
    pub entry_count: usize,
}

/// Persistence owning the actual history records.
///
/// Every call is a blocking request: a value on success, an error otherwise.
pub trait HistoryStore {
    /// All entries, most recent first.
    fn fetch_all(&self) -> Result<Vec<HistoryEntry>, StoreError>;

    /// Removes the entry at `position` in `fetch_all` order.
    ///
    /// An invalid position is logged and ignored by the store.
    fn delete_at(&mut self, position: usize) -> Result<(), StoreError>;

    fn clear_all(&mut self) -> Result<(), StoreError>;

    /// `Ok(None)` signals that no export medium is available.
    fn export_as_artifact(&self) -> Result<Option<ExportArtifact>, StoreError>;

    fn has_entries(&self) -> Result<bool, StoreError> {
        Ok(!self.fetch_all()?.is_empty())
    }
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("no handler available for {mime_type}")]
    HandlerNotFound { mime_type: String },
    #[error("share handler failed: {0}")]
    Failed(String),
}

/// OS-level surface that accepts an exported artifact.
pub trait ShareTarget {
    fn share(&self, artifact: &ExportArtifact, subject: &str) -> Result<(), ShareError>;
}
