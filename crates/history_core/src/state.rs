use history_logging::history_warn;

use crate::confirm::PendingConfirmation;
use crate::view_model::{HistoryViewModel, MenuState, RowView, PLACEHOLDER_TEXT};
use crate::{HistoryError, HistoryStore, ListController, SelectionSession};

/// Everything the history screen owns between messages.
pub struct HistoryScreen<S> {
    pub(crate) controller: ListController<S>,
    pub(crate) session: SelectionSession,
    pub(crate) pending: Option<PendingConfirmation>,
    menu: MenuState,
    dirty: bool,
}

impl<S: HistoryStore> HistoryScreen<S> {
    pub fn new(store: S, title: impl Into<String>) -> Self {
        Self {
            controller: ListController::new(store, title),
            session: SelectionSession::new(),
            pending: None,
            menu: MenuState::default(),
            dirty: false,
        }
    }

    pub fn view(&self) -> HistoryViewModel {
        let selected = self.session.selected();
        let rows = self
            .controller
            .snapshot()
            .rows()
            .iter()
            .enumerate()
            .map(|(position, entry)| RowView {
                position,
                text: entry.content().unwrap_or(PLACEHOLDER_TEXT).to_string(),
                timestamp: entry.display_timestamp().map(str::to_string),
                format: entry.format_label().map(str::to_string),
                placeholder: entry.is_placeholder(),
                checked: selected.position_of(entry) == Some(position),
            })
            .collect();

        HistoryViewModel {
            title: self.controller.title().to_string(),
            rows,
            selection_active: self.session.is_active(),
            selected_count: selected.len(),
            menu: self.menu,
            pending_confirmation: self.pending.as_ref().map(PendingConfirmation::action),
            dirty: self.dirty,
        }
    }

    pub fn controller(&self) -> &ListController<S> {
        &self.controller
    }

    pub fn session(&self) -> &SelectionSession {
        &self.session
    }

    /// Direct store access for writes that happen outside this screen, such
    /// as a new scan. Send `Msg::Activated` afterwards to pick them up.
    pub fn store_mut(&mut self) -> &mut S {
        self.controller.store_mut()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Reloads the list, re-anchors any running selection and recomputes
    /// which menu actions are offered.
    pub(crate) fn reload(&mut self) -> Result<(), HistoryError> {
        self.controller.reload()?;
        self.session.refresh_positions(self.controller.snapshot());
        self.refresh_menu();
        self.mark_dirty();
        Ok(())
    }

    /// Recomputes the menu after the list changed by other means.
    pub(crate) fn refresh_menu(&mut self) {
        let has_entries = match self.controller.has_entries() {
            Ok(has_entries) => has_entries,
            Err(err) => {
                history_warn!("Could not query history store: {}", err);
                self.controller.entry_count() > 0
            }
        };
        self.menu = MenuState {
            export_enabled: has_entries,
            clear_enabled: has_entries,
        };
    }
}
