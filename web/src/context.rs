//! Todo Context
//!
//! The store handle and the reactive snapshot, shared via the Leptos Context API.

use leptos::prelude::*;
use todos::{TodoAction, TodoId, TodoItem, TodoState, TodoStore, TodoView};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// The store every component dispatches to
    store: StoredValue<TodoStore>,
    /// Latest snapshot published by the store
    pub snapshot: ReadSignal<TodoState>,
    /// Render model derived from `snapshot`
    pub view: Memo<TodoView>,
}

impl TodoContext {
    /// Wrap `store` alongside its mirrored snapshot and derived view
    pub fn new(store: TodoStore, snapshot: ReadSignal<TodoState>, view: Memo<TodoView>) -> Self {
        Self {
            store: StoredValue::new(store),
            snapshot,
            view,
        }
    }

    /// Dispatch an action to the store
    pub fn send(&self, action: TodoAction) {
        let event = action.event_type();
        self.store.with_value(|store| {
            if let Err(error) = store.send(action) {
                tracing::error!(event, %error, "Dispatch failed");
            }
        });
    }

    /// Current version of an item, without subscribing to changes
    pub fn item(&self, id: TodoId) -> Option<TodoItem> {
        self.snapshot.with_untracked(|state| state.get(&id).cloned())
    }
}

/// Get the todo context provided by [`crate::app::App`]
pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}
