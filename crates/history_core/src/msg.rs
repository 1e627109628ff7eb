#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The history screen became visible (created or resumed).
    Activated,
    /// User tapped a row.
    RowTapped { position: usize },
    /// User long-pressed a row, entering multi-select.
    RowLongPressed { position: usize },
    /// The row widget reported a check-state change while in multi-select.
    RowCheckChanged { position: usize, checked: bool },
    /// User picked "delete" from a row's context menu.
    RowDeleteRequested { position: usize },
    /// User picked the bulk "delete selected" action.
    DeleteSelectedClicked,
    /// Multi-select was dismissed without an action.
    SelectionDismissed,
    /// User picked "export" from the menu.
    ExportClicked,
    /// User picked "clear all" from the menu.
    ClearAllClicked,
    /// User confirmed the pending dialog.
    ConfirmationAccepted,
    /// User cancelled the pending dialog.
    ConfirmationCancelled,
    /// Fallback for placeholder wiring.
    NoOp,
}
