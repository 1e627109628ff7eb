use history_logging::history_debug;

use crate::{HistoryError, HistoryStore, ListController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearAll,
}

/// A destructive action waiting for the user's answer.
///
/// Consumed by either `accept` or `cancel`; dropping it is the same as
/// cancelling.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    action: ConfirmAction,
}

impl PendingConfirmation {
    pub(crate) fn new(action: ConfirmAction) -> Self {
        Self { action }
    }

    pub fn action(&self) -> ConfirmAction {
        self.action
    }

    pub fn accept<S: HistoryStore>(
        self,
        controller: &mut ListController<S>,
    ) -> Result<ConfirmAction, HistoryError> {
        match self.action {
            ConfirmAction::ClearAll => controller.clear_all()?,
        }
        Ok(self.action)
    }

    pub fn cancel(self) {
        history_debug!("Confirmation for {:?} cancelled", self.action);
    }
}
