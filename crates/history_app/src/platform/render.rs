use history_core::{ConfirmAction, HistoryViewModel, RowView};

/// Renders the screen as console lines.
pub fn render(view: &HistoryViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 3);
    lines.push(format!("== {} ==", view.title));
    if view.selection_active {
        lines.push(format!(
            "-- {} selected: `delete-selected` or `done` --",
            view.selected_count
        ));
    }
    lines.extend(view.rows.iter().map(|row| render_row(row, view.selection_active)));

    let mut menu = Vec::new();
    if view.menu.export_enabled {
        menu.push("export");
    }
    if view.menu.clear_enabled {
        menu.push("clear");
    }
    if !menu.is_empty() && !view.selection_active {
        lines.push(format!("menu: {}", menu.join(", ")));
    }
    if view.pending_confirmation == Some(ConfirmAction::ClearAll) {
        lines.push("Clear the whole history? [yes/no]".to_string());
    }
    lines
}

fn render_row(row: &RowView, selecting: bool) -> String {
    if row.placeholder {
        return format!("     {}", row.text);
    }
    let marker = match (selecting, row.checked) {
        (true, true) => "[x] ",
        (true, false) => "[ ] ",
        (false, _) => "",
    };
    let mut line = format!("{:>3}. {}{}", row.position, marker, row.text);
    if let Some(format) = &row.format {
        line.push_str(&format!("  ({format})"));
    }
    if let Some(timestamp) = &row.timestamp {
        line.push_str(&format!("  {timestamp}"));
    }
    line
}
