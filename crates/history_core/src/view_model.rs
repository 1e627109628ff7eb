use crate::ConfirmAction;

/// Text shown on the synthetic row of an empty history.
pub const PLACEHOLDER_TEXT: &str = "No items";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub export_enabled: bool,
    pub clear_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryViewModel {
    pub title: String,
    pub rows: Vec<RowView>,
    pub selection_active: bool,
    pub selected_count: usize,
    pub menu: MenuState,
    pub pending_confirmation: Option<ConfirmAction>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub position: usize,
    pub text: String,
    pub timestamp: Option<String>,
    pub format: Option<String>,
    pub placeholder: bool,
    pub checked: bool,
}
