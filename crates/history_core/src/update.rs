use history_logging::{history_error, history_info, history_warn};

use crate::{Dialog, Effect, ExportOutcome, HistoryError, HistoryScreen, HistoryStore, Msg};

/// Applies a message to the screen and returns any effects for the front end.
///
/// Store failures never escape: they are logged and the screen stays usable.
pub fn update<S: HistoryStore>(
    mut state: HistoryScreen<S>,
    msg: Msg,
) -> (HistoryScreen<S>, Vec<Effect>) {
    let effects = match msg {
        Msg::Activated => {
            report(state.reload());
            Vec::new()
        }
        Msg::RowTapped { position } => {
            if state.session.is_active() {
                return (state, Vec::new());
            }
            match state.controller.item_at(position) {
                Ok(entry) if !entry.is_placeholder() => vec![
                    Effect::ReturnEntry {
                        position,
                        entry: entry.clone(),
                    },
                    Effect::Finish,
                ],
                Ok(_) => Vec::new(),
                Err(err) => {
                    report::<()>(Err(err));
                    Vec::new()
                }
            }
        }
        Msg::RowLongPressed { position } => {
            match state.session.begin(&state.controller, position) {
                Ok(true) => state.mark_dirty(),
                Ok(false) => {}
                Err(err) => report::<()>(Err(err)),
            }
            Vec::new()
        }
        Msg::RowCheckChanged { position, checked } => {
            if !state.session.is_active() {
                return (state, Vec::new());
            }
            match state.controller.item_at(position) {
                Ok(entry) => {
                    let entry = entry.clone();
                    if state.session.toggle(&entry, position, checked) {
                        state.mark_dirty();
                    }
                }
                Err(err) => report::<()>(Err(err)),
            }
            Vec::new()
        }
        Msg::RowDeleteRequested { position } => {
            if state.session.is_active() {
                return (state, Vec::new());
            }
            match state.controller.delete_at(position) {
                Ok(true) => report(state.reload()),
                Ok(false) => {}
                Err(err) => report::<()>(Err(err)),
            }
            Vec::new()
        }
        Msg::DeleteSelectedClicked => {
            if !state.session.is_active() {
                return (state, Vec::new());
            }
            match state.session.commit_delete(&mut state.controller) {
                Ok(commit) => history_info!(
                    "Deleted {} selected entries ({} missing)",
                    commit.deleted,
                    commit.missing
                ),
                Err(err) => report::<()>(Err(err)),
            }
            finish_session(&mut state);
            Vec::new()
        }
        Msg::SelectionDismissed => {
            finish_session(&mut state);
            Vec::new()
        }
        Msg::ExportClicked => {
            if state.session.is_active() || !state.menu().export_enabled {
                return (state, Vec::new());
            }
            match state.controller.export_all() {
                Ok(ExportOutcome::Ready(artifact)) => vec![Effect::Share(artifact)],
                Ok(ExportOutcome::Unavailable) => {
                    history_warn!("Export requested but no writable medium is available");
                    vec![Effect::ShowDialog(Dialog::ExportUnavailable)]
                }
                Err(err) => {
                    report::<()>(Err(err));
                    Vec::new()
                }
            }
        }
        Msg::ClearAllClicked => {
            if state.session.is_active() || !state.menu().clear_enabled || state.pending.is_some()
            {
                return (state, Vec::new());
            }
            state.pending = Some(state.controller.request_clear_all());
            state.mark_dirty();
            vec![Effect::ShowDialog(Dialog::ConfirmClearAll)]
        }
        Msg::ConfirmationAccepted => {
            let Some(pending) = state.pending.take() else {
                return (state, Vec::new());
            };
            state.mark_dirty();
            match pending.accept(&mut state.controller) {
                Ok(_) => vec![Effect::Finish],
                Err(err) => {
                    report::<()>(Err(err));
                    report(state.reload());
                    Vec::new()
                }
            }
        }
        Msg::ConfirmationCancelled => {
            if let Some(pending) = state.pending.take() {
                pending.cancel();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn finish_session<S: HistoryStore>(state: &mut HistoryScreen<S>) {
    if !state.session.is_active() {
        return;
    }
    let result = state.session.finish(&mut state.controller);
    state.refresh_menu();
    state.mark_dirty();
    report(result);
}

fn report<T>(result: Result<T, HistoryError>) {
    match result {
        Ok(_) => {}
        Err(err @ HistoryError::OutOfRange { .. }) => {
            history_error!("Row position out of range: {}", err);
        }
        Err(err) => history_warn!("History action failed: {}", err),
    }
}
