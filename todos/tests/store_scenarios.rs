//! Integration tests for the todo reducer running inside a Store
//!
//! These drive the store the way the UI does: send an action, then render
//! from the published snapshot.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use std::sync::{Arc, Mutex};
use todos::{
    Filter, Mark, TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState, TodoStore,
    TodoView,
};
use todos_runtime::Store;
use todos_testing::SequentialIdGenerator;

fn test_store() -> TodoStore {
    let env = TodoEnvironment::new(Arc::new(SequentialIdGenerator::new()));
    Store::new(TodoState::new(), TodoReducer::new(), env)
}

fn id(n: u64) -> TodoId {
    TodoId::from_uuid(SequentialIdGenerator::nth(n))
}

fn type_and_enter(store: &TodoStore, text: &str) {
    store
        .send(TodoAction::ChangeDraft {
            text: text.to_string(),
        })
        .unwrap();
    let draft = store.state(|s| s.draft.clone());
    store.send(TodoAction::CommitDraft { text: draft }).unwrap();
}

fn view(store: &TodoStore) -> TodoView {
    store.state(TodoView::derive)
}

#[test]
fn test_buy_milk_lifecycle() {
    let store = test_store();
    assert_eq!(view(&store).total, 0);

    type_and_enter(&store, "Buy milk");
    let v = view(&store);
    assert_eq!(v.total, 1);
    assert_eq!(v.active_count, 1);
    assert_eq!(v.visible[0].title, "Buy milk");
    assert!(!v.show_clear_completed());
    assert!(store.state(|s| s.draft.is_empty()));

    let item = v.visible[0].clone();
    store
        .send(TodoAction::MarkItem {
            id: item.id,
            mark: item.toggle_mark(),
        })
        .unwrap();
    let v = view(&store);
    assert_eq!(v.active_count, 0);
    assert!(v.show_clear_completed());

    store.send(TodoAction::ClearCompleted).unwrap();
    let v = view(&store);
    assert_eq!(v.total, 0);
    assert!(!v.show_clear_completed());
}

#[test]
fn test_add_two_delete_first() {
    let store = test_store();
    type_and_enter(&store, "A");
    type_and_enter(&store, "B");

    store.send(TodoAction::DeleteItem { id: id(1) }).unwrap();

    let titles: Vec<String> = view(&store).visible.into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["B"]);
}

#[test]
fn test_filter_round_trip_reveals_everything() {
    let store = test_store();
    type_and_enter(&store, "A");
    type_and_enter(&store, "B");
    store
        .send(TodoAction::MarkItem {
            id: id(2),
            mark: Mark::Completed,
        })
        .unwrap();
    let items_before = store.state(|s| s.items.clone());

    store
        .send(TodoAction::ChangeFilter {
            filter: Filter::Active,
        })
        .unwrap();
    assert_eq!(view(&store).visible.len(), 1);

    store
        .send(TodoAction::ChangeFilter {
            filter: Filter::Completed,
        })
        .unwrap();
    assert_eq!(view(&store).visible[0].title, "B");

    store
        .send(TodoAction::ChangeFilter { filter: Filter::All })
        .unwrap();
    assert_eq!(view(&store).visible, items_before);
    assert_eq!(store.state(|s| s.items.clone()), items_before);
}

#[test]
fn test_inline_edit_keystrokes() {
    let store = test_store();
    type_and_enter(&store, "Wash car");
    let item = store.state(|s| s.items[0].clone());

    // The edit field commits on every keystroke
    for title in ["Wash ca", "Wash c", "Wash cat"] {
        store
            .send(TodoAction::CommitItem {
                item: item.retitled(title),
            })
            .unwrap();
    }

    let edited = store.state(|s| s.get(&item.id).cloned()).unwrap();
    assert_eq!(edited.title, "Wash cat");
    assert!(!edited.completed);
}

#[test]
fn test_every_send_publishes_one_snapshot() {
    let store = test_store();
    let labels = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&labels);
    let subscription = store.subscribe(move |state: &TodoState| {
        sink.lock()
            .unwrap()
            .push(TodoView::derive(state).items_left_label());
    });

    type_and_enter(&store, "A");
    store.send(TodoAction::CommitDraft { text: " ".into() }).unwrap();
    store
        .send(TodoAction::MarkItem {
            id: id(1),
            mark: Mark::Completed,
        })
        .unwrap();
    store.unsubscribe(subscription);

    assert_eq!(
        *labels.lock().unwrap(),
        [
            "0 items left",
            "1 item left",
            "1 item left",
            "0 items left"
        ]
    );
    assert_eq!(store.subscriber_count(), 0);
}
