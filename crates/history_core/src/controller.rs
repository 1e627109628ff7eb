use history_logging::{history_debug, history_info};

use crate::confirm::{ConfirmAction, PendingConfirmation};
use crate::{ExportArtifact, HistoryEntry, HistoryError, HistoryStore};

/// Ordered rows currently bound to the view. Replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListSnapshot {
    rows: Vec<HistoryEntry>,
}

impl ListSnapshot {
    pub fn rows(&self) -> &[HistoryEntry] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&HistoryEntry> {
        self.rows.get(position)
    }

    /// Current position of `entry`, preferring `hint` when it still matches.
    pub(crate) fn locate(&self, entry: &HistoryEntry, hint: usize) -> Option<usize> {
        if self.rows.get(hint) == Some(entry) {
            return Some(hint);
        }
        self.rows.iter().position(|row| row == entry)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Ready(ExportArtifact),
    /// No writable medium; surfaced to the user, never raised.
    Unavailable,
}

impl ExportOutcome {
    pub fn into_artifact(self) -> Result<ExportArtifact, HistoryError> {
        match self {
            ExportOutcome::Ready(artifact) => Ok(artifact),
            ExportOutcome::Unavailable => Err(HistoryError::ExportUnavailable),
        }
    }
}

/// Owns the visible list and talks to the store on its behalf.
pub struct ListController<S> {
    store: S,
    base_title: String,
    title: String,
    snapshot: ListSnapshot,
    entry_count: usize,
    reload_count: u64,
}

impl<S: HistoryStore> ListController<S> {
    pub fn new(store: S, base_title: impl Into<String>) -> Self {
        let base_title = base_title.into();
        Self {
            store,
            title: base_title.clone(),
            base_title,
            snapshot: ListSnapshot::default(),
            entry_count: 0,
            reload_count: 0,
        }
    }

    /// Re-reads the store and replaces the snapshot.
    ///
    /// An empty store yields a single placeholder row so the view is never
    /// bound to zero rows. On failure the previous snapshot is kept.
    pub fn reload(&mut self) -> Result<(), HistoryError> {
        let mut rows = self.store.fetch_all()?;
        self.entry_count = rows.len();
        self.title = format!("{} ({})", self.base_title, self.entry_count);
        if rows.is_empty() {
            rows.push(HistoryEntry::placeholder());
        }
        self.snapshot = ListSnapshot { rows };
        self.reload_count += 1;
        history_debug!(
            "History reloaded: {} entries (reload #{})",
            self.entry_count,
            self.reload_count
        );
        Ok(())
    }

    pub fn item_at(&self, position: usize) -> Result<&HistoryEntry, HistoryError> {
        self.snapshot.get(position).ok_or(HistoryError::OutOfRange {
            position,
            len: self.snapshot.len(),
        })
    }

    /// Deletes the stored entry behind `position`. Returns whether the store
    /// was asked to delete anything; placeholder rows are skipped.
    ///
    /// The snapshot is left as-is; callers reload afterwards.
    pub fn delete_at(&mut self, position: usize) -> Result<bool, HistoryError> {
        if self.item_at(position)?.is_placeholder() {
            history_debug!("Ignoring delete of placeholder row {}", position);
            return Ok(false);
        }
        self.store.delete_at(position)?;
        Ok(true)
    }

    /// The store's rows as of now. The bound snapshot is left untouched.
    pub(crate) fn stored_rows(&self) -> Result<ListSnapshot, HistoryError> {
        Ok(ListSnapshot {
            rows: self.store.fetch_all()?,
        })
    }

    /// Deletes by a position already resolved against `stored_rows`.
    pub(crate) fn delete_stored_at(&mut self, position: usize) -> Result<(), HistoryError> {
        Ok(self.store.delete_at(position)?)
    }

    pub fn clear_all(&mut self) -> Result<(), HistoryError> {
        self.store.clear_all()?;
        history_info!("History cleared ({} entries)", self.entry_count);
        Ok(())
    }

    pub fn export_all(&self) -> Result<ExportOutcome, HistoryError> {
        match self.store.export_as_artifact()? {
            Some(artifact) => {
                history_info!(
                    "Exported {} entries to {:?}",
                    artifact.entry_count,
                    artifact.path
                );
                Ok(ExportOutcome::Ready(artifact))
            }
            None => Ok(ExportOutcome::Unavailable),
        }
    }

    /// First step of the two-step clear: nothing changes until accepted.
    pub fn request_clear_all(&self) -> PendingConfirmation {
        PendingConfirmation::new(ConfirmAction::ClearAll)
    }

    /// Whether the export and clear menu actions should be offered.
    pub fn has_entries(&self) -> Result<bool, HistoryError> {
        Ok(self.store.has_entries()?)
    }

    pub fn snapshot(&self) -> &ListSnapshot {
        &self.snapshot
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Number of successful reloads since construction.
    pub fn reload_count(&self) -> u64 {
        self.reload_count
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
