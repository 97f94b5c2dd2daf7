//! View derivation.
//!
//! Everything the UI shows is computed from a [`TodoState`] snapshot by
//! [`TodoView::derive`]. The UI re-derives on every snapshot the store publishes.

use crate::types::{Filter, TodoItem, TodoState};

/// Items passing the state's active filter, in collection order
pub fn visible_items(state: &TodoState) -> impl Iterator<Item = &TodoItem> {
    let filter = state.filter;
    state.items.iter().filter(move |item| filter.matches(item))
}

/// Render model for the list and its footer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoView {
    /// Items to display under the active filter
    pub visible: Vec<TodoItem>,
    /// Active filter
    pub filter: Filter,
    /// Number of incomplete items, regardless of filter
    pub active_count: usize,
    /// Total number of items, regardless of filter
    pub total: usize,
    /// Whether any completed items exist
    pub has_completed: bool,
}

impl TodoView {
    /// Derive the render model from a state snapshot
    #[must_use]
    pub fn derive(state: &TodoState) -> Self {
        let active_count = state.active_count();
        Self {
            visible: visible_items(state).cloned().collect(),
            filter: state.filter,
            active_count,
            total: state.count(),
            has_completed: active_count < state.count(),
        }
    }

    /// Whether the "clear completed" control is shown
    #[must_use]
    pub const fn show_clear_completed(&self) -> bool {
        self.has_completed
    }

    /// Footer text, e.g. "3 items left"
    #[must_use]
    pub fn items_left_label(&self) -> String {
        match self.active_count {
            1 => "1 item left".to_string(),
            n => format!("{n} items left"),
        }
    }
}

/// Accessible name of an item's completion checkbox
#[must_use]
pub fn toggle_label(item: &TodoItem) -> String {
    format!("Mark \"{}\" as {}", item.title, item.toggle_mark())
}

/// Accessible name of an item's inline editor
#[must_use]
pub fn edit_label(item: &TodoItem) -> String {
    format!("Edit todo \"{}\"", item.title)
}

/// Accessible name of an item's delete button
#[must_use]
pub fn delete_label(item: &TodoItem) -> String {
    format!("Delete todo \"{}\"", item.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;
    use uuid::Uuid;

    fn item(n: u128, title: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::from_uuid(Uuid::from_u128(n)),
            title: title.to_string(),
            completed,
        }
    }

    fn state(filter: Filter) -> TodoState {
        TodoState {
            items: vec![
                item(1, "A", false),
                item(2, "B", true),
                item(3, "C", false),
            ],
            draft: String::new(),
            filter,
        }
    }

    fn titles(view: &TodoView) -> Vec<&str> {
        view.visible.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn empty_state() {
        let view = TodoView::derive(&TodoState::new());
        assert!(view.visible.is_empty());
        assert_eq!(view.active_count, 0);
        assert!(!view.show_clear_completed());
        assert_eq!(view.items_left_label(), "0 items left");
    }

    #[test]
    fn filters_preserve_order() {
        assert_eq!(titles(&TodoView::derive(&state(Filter::All))), ["A", "B", "C"]);
        assert_eq!(titles(&TodoView::derive(&state(Filter::Active))), ["A", "C"]);
        assert_eq!(titles(&TodoView::derive(&state(Filter::Completed))), ["B"]);
    }

    #[test]
    fn counters_ignore_filter() {
        for filter in Filter::ALL {
            let view = TodoView::derive(&state(filter));
            assert_eq!(view.filter, filter);
            assert_eq!(view.active_count, 2);
            assert_eq!(view.total, 3);
            assert!(view.show_clear_completed());
        }
    }

    #[test]
    fn items_left_label_pluralizes() {
        let mut view = TodoView::derive(&state(Filter::All));
        assert_eq!(view.items_left_label(), "2 items left");
        view.active_count = 1;
        assert_eq!(view.items_left_label(), "1 item left");
    }

    #[test]
    fn toggle_label_names_the_target_mark() {
        assert_eq!(toggle_label(&item(1, "Buy milk", false)), "Mark \"Buy milk\" as completed");
        assert_eq!(toggle_label(&item(1, "Buy milk", true)), "Mark \"Buy milk\" as active");
    }

    #[test]
    fn row_labels_quote_the_title() {
        let milk = item(1, "Buy milk", false);
        assert_eq!(edit_label(&milk), "Edit todo \"Buy milk\"");
        assert_eq!(delete_label(&milk), "Delete todo \"Buy milk\"");
    }
}
