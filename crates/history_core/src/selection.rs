use std::collections::HashMap;

use history_logging::{history_debug, history_trace, history_warn};

use crate::controller::ListSnapshot;
use crate::{HistoryEntry, HistoryError, HistoryStore, ListController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Inactive,
    Active,
    Committing,
}

/// Checked rows keyed by entry value. Positions are only a cache of where the
/// row sat when it was checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    rows: HashMap<HistoryEntry, usize>,
}

impl SelectionSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, entry: &HistoryEntry) -> bool {
        self.rows.contains_key(entry)
    }

    pub fn position_of(&self, entry: &HistoryEntry) -> Option<usize> {
        self.rows.get(entry).copied()
    }

    fn insert(&mut self, entry: HistoryEntry, position: usize) -> bool {
        self.rows.insert(entry, position) != Some(position)
    }

    fn remove(&mut self, entry: &HistoryEntry) -> bool {
        self.rows.remove(entry).is_some()
    }

    fn clear(&mut self) {
        self.rows.clear();
    }

    /// Rewrites cached positions against `snapshot`, dropping rows that are
    /// gone. Returns the number of dropped rows.
    fn refresh(&mut self, snapshot: &ListSnapshot) -> usize {
        let before = self.rows.len();
        self.rows = std::mem::take(&mut self.rows)
            .into_iter()
            .filter_map(|(entry, hint)| {
                snapshot
                    .locate(&entry, hint)
                    .map(|position| (entry, position))
            })
            .collect();
        before - self.rows.len()
    }

    /// Current positions of all checked rows, highest first.
    fn resolve_descending(&self, snapshot: &ListSnapshot) -> (Vec<usize>, usize) {
        let mut positions = Vec::with_capacity(self.rows.len());
        let mut missing = 0;
        for (entry, &hint) in &self.rows {
            match snapshot.locate(entry, hint) {
                Some(position) => positions.push(position),
                None => missing += 1,
            }
        }
        positions.sort_unstable_by(|a, b| b.cmp(a));
        positions.dedup();
        (positions, missing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitReport {
    pub deleted: usize,
    /// Checked rows that were no longer in the list at commit time.
    pub missing: usize,
}

/// The multi-select interaction: begin, toggle rows, commit or cancel, finish.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSession {
    phase: SessionPhase,
    selected: SelectionSet,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters multi-select from a long-press on `position`, checking that row.
    ///
    /// Returns `false` when a session is already running or the row is the
    /// placeholder.
    pub fn begin<S: HistoryStore>(
        &mut self,
        controller: &ListController<S>,
        position: usize,
    ) -> Result<bool, HistoryError> {
        if self.phase != SessionPhase::Inactive {
            return Ok(false);
        }
        let entry = controller.item_at(position)?;
        if entry.is_placeholder() {
            history_debug!("Long-press on placeholder row ignored");
            return Ok(false);
        }
        self.selected.clear();
        self.phase = SessionPhase::Active;
        self.selected.insert(entry.clone(), position);
        history_debug!("Selection session started at row {}", position);
        Ok(true)
    }

    /// Records a check-state change. Returns whether the selection changed.
    pub fn toggle(&mut self, entry: &HistoryEntry, position: usize, checked: bool) -> bool {
        if self.phase != SessionPhase::Active {
            return false;
        }
        if entry.is_placeholder() {
            history_debug!("Placeholder row cannot be selected");
            return false;
        }
        if checked {
            self.selected.insert(entry.clone(), position)
        } else {
            self.selected.remove(entry)
        }
    }

    /// Re-anchors cached positions after the list was reloaded underneath an
    /// active session.
    pub fn refresh_positions(&mut self, snapshot: &ListSnapshot) {
        if self.phase == SessionPhase::Inactive {
            return;
        }
        let dropped = self.selected.refresh(snapshot);
        if dropped > 0 {
            history_debug!("{} selected rows vanished on reload", dropped);
        }
    }

    /// Deletes every checked row through the controller.
    ///
    /// Rows are resolved by value against what the store holds now, not the
    /// last snapshot, and removed from the highest position down so earlier
    /// deletions never shift later ones. The session stays in `Committing`
    /// until `finish` is called.
    pub fn commit_delete<S: HistoryStore>(
        &mut self,
        controller: &mut ListController<S>,
    ) -> Result<CommitReport, HistoryError> {
        if self.phase != SessionPhase::Active {
            return Ok(CommitReport::default());
        }
        self.phase = SessionPhase::Committing;

        let stored = controller.stored_rows()?;
        let (positions, missing) = self.selected.resolve_descending(&stored);
        if missing > 0 {
            history_warn!("{} selected rows no longer stored; skipping", missing);
        }
        for &position in &positions {
            history_trace!("Deleting selected row {}", position);
            controller.delete_stored_at(position)?;
        }
        let report = CommitReport {
            deleted: positions.len(),
            missing,
        };
        history_debug!("Deleted {} selected rows", report.deleted);
        Ok(report)
    }

    /// Leaves multi-select, committed or not: clears the selection and
    /// reloads the list exactly once.
    pub fn finish<S: HistoryStore>(
        &mut self,
        controller: &mut ListController<S>,
    ) -> Result<(), HistoryError> {
        if self.phase == SessionPhase::Inactive {
            return Ok(());
        }
        self.selected.clear();
        self.phase = SessionPhase::Inactive;
        controller.reload()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != SessionPhase::Inactive
    }

    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }
}
