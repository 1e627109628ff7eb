//! Scan history core: list controller, multi-select session and the
//! message-driven screen state machine built on them.
mod confirm;
mod controller;
mod effect;
mod entry;
mod error;
mod msg;
mod selection;
mod state;
mod store;
mod update;
mod view_model;

pub use confirm::{ConfirmAction, PendingConfirmation};
pub use controller::{ExportOutcome, ListController, ListSnapshot};
pub use effect::{Dialog, Effect};
pub use entry::HistoryEntry;
pub use error::HistoryError;
pub use msg::Msg;
pub use selection::{CommitReport, SelectionSession, SelectionSet, SessionPhase};
pub use state::HistoryScreen;
pub use store::{ExportArtifact, HistoryStore, ShareError, ShareTarget, StoreError};
pub use update::update;
pub use view_model::{HistoryViewModel, MenuState, RowView, PLACEHOLDER_TEXT};
