//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of items plus two pieces of UI state
//! that live in the store: the draft being typed and the active filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, assigned at creation
    pub id: TodoId,
    /// Display text
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, active todo item
    #[must_use]
    pub const fn new(id: TodoId, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    /// Returns a copy of this item with another title
    #[must_use]
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// The mark that flips this item's completion
    #[must_use]
    pub const fn toggle_mark(&self) -> Mark {
        if self.completed {
            Mark::Active
        } else {
            Mark::Completed
        }
    }
}

/// Error returned when parsing a [`Filter`] or [`Mark`] from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseError {
    kind: &'static str,
    value: String,
}

/// Which items the list displays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    /// Every filter, in display order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Whether `item` passes this filter
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| ParseError {
                kind: "filter",
                value: s.to_string(),
            })
    }
}

/// Target completion state for an item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Not completed
    Active,
    /// Completed
    Completed,
}

impl Mark {
    /// The `completed` flag this mark sets
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseError {
                kind: "mark",
                value: s.to_string(),
            }),
        }
    }
}

/// State of the todo list
///
/// Items keep insertion order. Filtering happens in the view and never
/// touches this collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos, in insertion order
    pub items: Vec<TodoItem>,
    /// Text of the item being composed
    pub draft: String,
    /// Active display filter
    pub filter: Filter,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state showing `filter`
    #[must_use]
    pub fn with_filter(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of incomplete todos
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == *id)
    }

    /// Returns a mutable todo by ID
    pub fn get_mut(&mut self, id: &TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|t| t.id == *id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }
}

/// Actions the view can send to the store
///
/// Each variant serializes with a `type` tag carrying its dotted event name,
/// e.g. `{"type":"draft.change","text":"Buy"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TodoAction {
    /// Replace the draft text
    #[serde(rename = "draft.change")]
    ChangeDraft {
        /// New draft text
        text: String,
    },

    /// Turn the draft into a new item, if it is not blank
    #[serde(rename = "draft.commit")]
    CommitDraft {
        /// Text to commit
        text: String,
    },

    /// Set the completion state of an item
    #[serde(rename = "item.mark")]
    MarkItem {
        /// Item to mark
        id: TodoId,
        /// Target state
        mark: Mark,
    },

    /// Replace an item with an edited copy (matched by id)
    #[serde(rename = "item.commit")]
    CommitItem {
        /// Edited item
        item: TodoItem,
    },

    /// Remove an item
    #[serde(rename = "item.delete")]
    DeleteItem {
        /// Item to delete
        id: TodoId,
    },

    /// Select which items are displayed
    #[serde(rename = "filter.change")]
    ChangeFilter {
        /// New filter
        filter: Filter,
    },

    /// Remove every completed item
    #[serde(rename = "items.clearCompleted")]
    ClearCompleted,
}

impl TodoAction {
    /// Returns the dotted event name, matching the serialized `type` tag
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::ChangeDraft { .. } => "draft.change",
            Self::CommitDraft { .. } => "draft.commit",
            Self::MarkItem { .. } => "item.mark",
            Self::CommitItem { .. } => "item.commit",
            Self::DeleteItem { .. } => "item.delete",
            Self::ChangeFilter { .. } => "filter.change",
            Self::ClearCompleted => "items.clearCompleted",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(n: u128) -> TodoId {
        TodoId::from_uuid(Uuid::from_u128(n))
    }

    #[test]
    fn todo_item_new_is_active() {
        let item = TodoItem::new(id(1), "Test todo".to_string());
        assert_eq!(item.title, "Test todo");
        assert!(!item.completed);
        assert_eq!(item.toggle_mark(), Mark::Completed);
    }

    #[test]
    fn retitled_keeps_identity() {
        let mut item = TodoItem::new(id(1), "Old".to_string());
        item.completed = true;
        let edited = item.retitled("New");
        assert_eq!(edited.id, item.id);
        assert!(edited.completed);
        assert_eq!(edited.title, "New");
        assert_eq!(edited.toggle_mark(), Mark::Active);
    }

    #[test]
    fn filter_matches() {
        let active = TodoItem::new(id(1), "a".to_string());
        let mut done = TodoItem::new(id(2), "b".to_string());
        done.completed = true;

        assert!(Filter::All.matches(&active) && Filter::All.matches(&done));
        assert!(Filter::Active.matches(&active) && !Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&active) && Filter::Completed.matches(&done));
    }

    #[test]
    fn filter_text_forms() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
        let err = "done".parse::<Filter>().unwrap_err();
        assert_eq!(err.to_string(), "unknown filter `done`");
        assert_eq!("completed".parse::<Mark>().unwrap(), Mark::Completed);
        assert!("yes".parse::<Mark>().is_err());
    }

    #[test]
    fn todo_state_counts() {
        let mut state = TodoState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.completed_count(), 0);

        state.items.push(TodoItem::new(id(1), "Todo 1".to_string()));
        state.items.push(TodoItem::new(id(2), "Todo 2".to_string()));
        state.get_mut(&id(2)).unwrap().completed = true;

        assert_eq!(state.count(), 2);
        assert_eq!(state.active_count(), 1);
        assert_eq!(state.completed_count(), 1);
        assert!(state.exists(&id(1)));
        assert!(!state.exists(&id(3)));
    }

    #[test]
    fn action_wire_names() {
        let action = TodoAction::MarkItem {
            id: id(7),
            mark: Mark::Completed,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "item.mark");
        assert_eq!(json["mark"], "completed");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000007");
        assert_eq!(action.event_type(), "item.mark");

        let parsed: TodoAction =
            serde_json::from_str(r#"{"type":"filter.change","filter":"active"}"#).unwrap();
        assert_eq!(
            parsed,
            TodoAction::ChangeFilter {
                filter: Filter::Active
            }
        );

        let clear: TodoAction = serde_json::from_str(r#"{"type":"items.clearCompleted"}"#).unwrap();
        assert_eq!(clear.event_type(), "items.clearCompleted");
    }
}
