use crate::{ExportArtifact, HistoryEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the chosen entry back to the scanner screen.
    ReturnEntry { position: usize, entry: HistoryEntry },
    Share(ExportArtifact),
    ShowDialog(Dialog),
    /// Close the history screen.
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Informational: nowhere to write the export.
    ExportUnavailable,
    /// Asks before wiping the whole history.
    ConfirmClearAll,
}
