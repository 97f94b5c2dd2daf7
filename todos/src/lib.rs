//! Todo list state machine.
//!
//! A flat reducer over `(items, draft, filter)` plus the pure derivation the
//! UI renders from. Every transition is synchronous and total.
//!
//! - Domain model (items, filter, draft) and the actions that change it
//! - [`TodoReducer`] applying those actions
//! - [`TodoView`] deriving the displayed list and footer counters
//! - [`AppConfig`] for the front end
//!
//! # Quick Start
//!
//! ```
//! use todos::{Mark, TodoAction, TodoStore, TodoView, new_store};
//! use todos::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store: TodoStore = new_store(&AppConfig::default());
//!
//! store.send(TodoAction::CommitDraft { text: "Buy milk".to_string() })?;
//! let id = store.state(|s| s.items[0].id);
//!
//! store.send(TodoAction::MarkItem { id, mark: Mark::Completed })?;
//!
//! let view = store.state(TodoView::derive);
//! assert_eq!(view.active_count, 0);
//! assert!(view.show_clear_completed());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod reducer;
pub mod types;
pub mod view;

use todos_runtime::Store;

// Re-export commonly used types
pub use config::AppConfig;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{Filter, Mark, TodoAction, TodoId, TodoItem, TodoState};
pub use view::TodoView;

/// Store running the todo reducer
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Build a store starting from `config`'s initial state, with random ids
#[must_use]
pub fn new_store(config: &AppConfig) -> TodoStore {
    Store::new(
        config.initial_state(),
        TodoReducer::new(),
        TodoEnvironment::default(),
    )
}
