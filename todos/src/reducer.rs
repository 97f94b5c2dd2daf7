//! Reducer logic for the todo list.
//!
//! Every transition is total: actions aimed at unknown ids and blank drafts
//! leave the state untouched. No transition produces effects.

use crate::types::{Filter, Mark, TodoAction, TodoId, TodoItem, TodoState};
use std::sync::Arc;
use todos_core::{
    SmallVec,
    effect::Effect,
    environment::{IdGenerator, RandomIdGenerator},
    reducer::Reducer,
    smallvec,
};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of ids for new items
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::new(Arc::new(RandomIdGenerator))
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn commit_draft(state: &mut TodoState, text: &str, env: &TodoEnvironment) {
        let title = text.trim();
        if title.is_empty() {
            tracing::debug!("Ignoring blank draft commit");
            return;
        }

        let id = TodoId::from_uuid(env.ids.next_id());
        if state.exists(&id) {
            tracing::warn!(%id, "Id generator repeated an id, dropping draft commit");
            return;
        }

        state.items.push(TodoItem::new(id, title.to_string()));
        state.draft.clear();
        tracing::debug!(%id, "Todo created");
    }

    fn mark_item(state: &mut TodoState, id: TodoId, mark: Mark) {
        match state.get_mut(&id) {
            Some(item) => item.completed = mark.is_completed(),
            None => tracing::debug!(%id, %mark, "Ignoring mark for unknown todo"),
        }
    }

    fn commit_item(state: &mut TodoState, item: TodoItem) {
        match state.get_mut(&item.id) {
            Some(existing) => *existing = item,
            None => tracing::debug!(id = %item.id, "Ignoring edit for unknown todo"),
        }
    }

    fn delete_item(state: &mut TodoState, id: TodoId) {
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        if state.items.len() == before {
            tracing::debug!(%id, "Ignoring delete for unknown todo");
        }
    }

    fn change_filter(state: &mut TodoState, filter: Filter) {
        state.filter = filter;
    }

    fn clear_completed(state: &mut TodoState) {
        let before = state.items.len();
        state.items.retain(|item| !item.completed);
        tracing::debug!(removed = before - state.items.len(), "Cleared completed todos");
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::ChangeDraft { text } => state.draft = text,
            TodoAction::CommitDraft { text } => Self::commit_draft(state, &text, env),
            TodoAction::MarkItem { id, mark } => Self::mark_item(state, id, mark),
            TodoAction::CommitItem { item } => Self::commit_item(state, item),
            TodoAction::DeleteItem { id } => Self::delete_item(state, id),
            TodoAction::ChangeFilter { filter } => Self::change_filter(state, filter),
            TodoAction::ClearCompleted => Self::clear_completed(state),
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}
