mod common;

use common::{entry, init_logging, RecordingStore};
use history_core::{ListController, SelectionSession, SessionPhase};
use pretty_assertions::assert_eq;

fn loaded(texts: &[&str]) -> ListController<RecordingStore> {
    let mut controller = ListController::new(RecordingStore::with(texts), "History");
    controller.reload().unwrap();
    controller
}

#[test]
fn long_press_starts_session_with_pressed_row_checked() {
    init_logging();
    let controller = loaded(&["a", "b"]);
    let mut session = SelectionSession::new();

    assert!(session.begin(&controller, 1).unwrap());
    assert_eq!(session.phase(), SessionPhase::Active);
    assert!(session.selected().contains(&entry("b")));
    assert_eq!(session.selected().len(), 1);

    // Already active: a second long-press does not restart.
    assert!(!session.begin(&controller, 0).unwrap());
    assert_eq!(session.selected().len(), 1);
}

#[test]
fn placeholder_cannot_start_or_join_selection() {
    init_logging();
    let controller = loaded(&[]);
    let placeholder = controller.item_at(0).unwrap().clone();
    let mut session = SelectionSession::new();

    assert!(!session.begin(&controller, 0).unwrap());
    assert_eq!(session.phase(), SessionPhase::Inactive);

    let active = loaded(&["a"]);
    session.begin(&active, 0).unwrap();
    assert!(!session.toggle(&placeholder, 0, true));
    assert_eq!(session.selected().len(), 1);
}

#[test]
fn toggling_is_idempotent() {
    init_logging();
    let controller = loaded(&["a", "b"]);
    let mut session = SelectionSession::new();
    session.begin(&controller, 0).unwrap();

    assert!(session.toggle(&entry("b"), 1, true));
    assert!(!session.toggle(&entry("b"), 1, true));
    assert_eq!(session.selected().len(), 2);

    assert!(session.toggle(&entry("b"), 1, false));
    assert!(!session.toggle(&entry("b"), 1, false));
    assert_eq!(session.selected().len(), 1);
    assert!(!session.selected().contains(&entry("b")));
}

#[test]
fn toggling_is_commutative() {
    init_logging();
    let controller = loaded(&["a", "b", "c"]);

    let mut first = SelectionSession::new();
    first.begin(&controller, 0).unwrap();
    first.toggle(&entry("b"), 1, true);
    first.toggle(&entry("c"), 2, true);

    let mut second = SelectionSession::new();
    second.begin(&controller, 0).unwrap();
    second.toggle(&entry("c"), 2, true);
    second.toggle(&entry("b"), 1, true);

    assert_eq!(first.selected(), second.selected());
}

#[test]
fn toggle_outside_session_is_ignored() {
    init_logging();
    let mut session = SelectionSession::new();
    assert!(!session.toggle(&entry("a"), 0, true));
    assert!(session.selected().is_empty());
}

#[test]
fn deleting_first_and_last_keeps_middle() {
    init_logging();
    let mut controller = loaded(&["a", "b", "c"]);
    let mut session = SelectionSession::new();
    session.begin(&controller, 0).unwrap();
    session.toggle(&entry("c"), 2, true);

    let report = session.commit_delete(&mut controller).unwrap();
    assert_eq!(report.deleted, 2);
    assert_eq!(report.missing, 0);
    assert_eq!(session.phase(), SessionPhase::Committing);
    // Highest position first so the lower one is still valid.
    assert_eq!(controller.store().deleted_positions, vec![2, 0]);
    assert_eq!(controller.store().texts(), vec!["b"]);

    session.finish(&mut controller).unwrap();
    assert_eq!(controller.snapshot().rows(), &[entry("b")]);
}

#[test]
fn commit_resolves_rows_that_moved_since_selection() {
    init_logging();
    let mut controller = loaded(&["a", "b", "c"]);
    let mut session = SelectionSession::new();
    session.begin(&controller, 2).unwrap();

    // A new scan lands on top and the list is reloaded under the session.
    controller.store_mut().entries.insert(0, entry("new"));
    controller.reload().unwrap();
    session.refresh_positions(controller.snapshot());
    assert_eq!(session.selected().position_of(&entry("c")), Some(3));

    session.commit_delete(&mut controller).unwrap();
    assert_eq!(controller.store().texts(), vec!["new", "a", "b"]);
}

#[test]
fn commit_uses_stored_rows_when_list_was_not_reloaded() {
    init_logging();
    let mut controller = loaded(&["a", "b", "c"]);
    let mut session = SelectionSession::new();
    session.begin(&controller, 0).unwrap();
    session.toggle(&entry("c"), 2, true);

    // Written straight to the store; the bound list still shows [a, b, c].
    controller.store_mut().entries.insert(0, entry("new"));

    let report = session.commit_delete(&mut controller).unwrap();
    assert_eq!(report.deleted, 2);
    assert_eq!(controller.store().deleted_positions, vec![3, 1]);
    assert_eq!(controller.store().texts(), vec!["new", "b"]);
}

#[test]
fn rows_gone_before_commit_are_skipped() {
    init_logging();
    let mut controller = loaded(&["a", "b"]);
    let mut session = SelectionSession::new();
    session.begin(&controller, 1).unwrap();

    controller.store_mut().entries.remove(1);
    controller.reload().unwrap();

    let report = session.commit_delete(&mut controller).unwrap();
    assert_eq!(report.deleted, 0);
    assert_eq!(report.missing, 1);
    assert_eq!(controller.store().texts(), vec!["a"]);
}

#[test]
fn finish_after_commit_reloads_once_and_clears() {
    init_logging();
    let mut controller = loaded(&["a", "b"]);
    let mut session = SelectionSession::new();
    session.begin(&controller, 0).unwrap();
    session.commit_delete(&mut controller).unwrap();
    let fetches = controller.store().fetch_calls.get();

    session.finish(&mut controller).unwrap();

    assert_eq!(controller.store().fetch_calls.get(), fetches + 1);
    assert_eq!(session.phase(), SessionPhase::Inactive);
    assert!(session.selected().is_empty());
}

#[test]
fn cancel_reloads_once_and_clears() {
    init_logging();
    let mut controller = loaded(&["a", "b"]);
    let mut session = SelectionSession::new();
    session.begin(&controller, 0).unwrap();
    session.toggle(&entry("b"), 1, true);
    let fetches = controller.store().fetch_calls.get();

    session.finish(&mut controller).unwrap();

    assert_eq!(controller.store().fetch_calls.get(), fetches + 1);
    assert!(controller.store().deleted_positions.is_empty());
    assert!(session.selected().is_empty());

    // Finishing an inactive session is not another exit.
    session.finish(&mut controller).unwrap();
    assert_eq!(controller.store().fetch_calls.get(), fetches + 1);
}
