/// One row of the history list.
///
/// Rows compare by value; that equality is the identity used to key the
/// multi-selection, so a row can be found again after the list shifts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HistoryEntry {
    content: Option<String>,
    display_timestamp: Option<String>,
    format_label: Option<String>,
}

impl HistoryEntry {
    pub fn new(
        content: impl Into<String>,
        display_timestamp: Option<String>,
        format_label: Option<String>,
    ) -> Self {
        Self {
            content: Some(content.into()),
            display_timestamp,
            format_label,
        }
    }

    /// The synthetic "no entries" row. Only the list controller creates these.
    pub(crate) fn placeholder() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn display_timestamp(&self) -> Option<&str> {
        self.display_timestamp.as_deref()
    }

    pub fn format_label(&self) -> Option<&str> {
        self.format_label.as_deref()
    }

    pub fn is_placeholder(&self) -> bool {
        self.content.is_none()
    }
}
