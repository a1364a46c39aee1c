//! Domain types for the todo list.
//!
//! A todo list is an ordered sequence of slots. Each slot pairs a [`TodoId`],
//! handed out once when the todo is added, with the current [`Todo`] value.
//! Two todos with the same text and flag are still different slots.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifier of a todo slot
///
/// Allocated from a monotonically increasing counter, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Wraps a raw id
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo: display text and whether it is resolved
///
/// Values are replaced wholesale on update, never edited in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    /// Text shown for the todo
    pub text: String,
    /// Whether the todo is complete
    pub resolved: bool,
}

impl Todo {
    /// A new, unresolved todo
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            resolved: false,
        }
    }

    /// Same text with `resolved` set to the given value
    #[must_use]
    pub fn with_resolved(&self, resolved: bool) -> Self {
        Self {
            text: self.text.clone(),
            resolved,
        }
    }

    /// Same text with `resolved` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        self.with_resolved(!self.resolved)
    }
}

/// One slot of the list
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoEntry {
    /// Slot identity
    pub id: TodoId,
    /// Current value of the slot
    pub todo: Todo,
}

impl TodoEntry {
    /// Creates a slot
    #[must_use]
    pub const fn new(id: TodoId, todo: Todo) -> Self {
        Self { id, todo }
    }
}

/// State of the todo list
///
/// The list is shared behind an `Arc`: each mutation builds a new list and
/// swaps it in, so a [`snapshot`](Self::snapshot) taken earlier never changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    todos: Arc<Vec<TodoEntry>>,
}

impl TodoState {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding `entries` in order
    #[must_use]
    pub fn from_entries(entries: Vec<TodoEntry>) -> Self {
        Self {
            todos: Arc::new(entries),
        }
    }

    /// All slots in insertion order
    #[must_use]
    pub fn entries(&self) -> &[TodoEntry] {
        &self.todos
    }

    /// Cheap handle on the current list
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<TodoEntry>> {
        Arc::clone(&self.todos)
    }

    /// Number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Looks up a slot by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoEntry> {
        self.todos.iter().find(|entry| entry.id == id)
    }

    /// Whether a slot with `id` exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Swaps in a new list value
    pub(crate) fn replace(&mut self, todos: Vec<TodoEntry>) {
        self.todos = Arc::new(todos);
    }
}

/// Actions accepted by the todo reducer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new unresolved todo
    AddTodo {
        /// Identity of the new slot
        id: TodoId,
        /// Text of the todo, may be empty
        text: String,
    },

    /// Replace the value of a slot, keeping its position
    UpdateTodo {
        /// Slot to replace
        id: TodoId,
        /// New value
        updated: Todo,
    },

    /// Remove a slot
    RemoveTodo {
        /// Slot to remove
        id: TodoId,
    },

    /// Flip `resolved` on a slot (fed back as an `UpdateTodo`)
    ToggleTodo {
        /// Slot to toggle
        id: TodoId,
    },
}
