//! Reducer logic for the todo list.
//!
//! Every mutation builds a fresh list and swaps it into state. Targets that
//! are not in the list are ignored without an error.

use crate::types::{Todo, TodoAction, TodoEntry, TodoId, TodoState};
use std::sync::Arc;
use todo_store_core::{
    SmallVec, effect::Effect, environment::IdGenerator, environment::SequentialIds,
    reducer::Reducer, smallvec,
};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of slot identities
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Allocates the identity for a new todo
    #[must_use]
    pub fn next_id(&self) -> TodoId {
        TodoId::new(self.ids.next_id())
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::new(Arc::new(SequentialIds::new()))
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add(state: &mut TodoState, id: TodoId, text: String) {
        if state.contains(id) {
            tracing::warn!(%id, "Ignoring add: id already in the list");
            return;
        }

        let mut todos = Vec::with_capacity(state.len() + 1);
        todos.extend_from_slice(state.entries());
        todos.push(TodoEntry::new(id, Todo::new(text)));
        state.replace(todos);

        tracing::debug!(%id, "Todo added");
    }

    fn update(state: &mut TodoState, id: TodoId, updated: Todo) {
        if !state.contains(id) {
            tracing::debug!(%id, "Update target not in list, ignoring");
            return;
        }

        let todos = state
            .entries()
            .iter()
            .map(|entry| {
                if entry.id == id {
                    TodoEntry::new(id, updated.clone())
                } else {
                    entry.clone()
                }
            })
            .collect();
        state.replace(todos);

        tracing::debug!(%id, "Todo updated");
    }

    fn remove(state: &mut TodoState, id: TodoId) {
        if !state.contains(id) {
            tracing::debug!(%id, "Remove target not in list, ignoring");
            return;
        }

        let todos = state
            .entries()
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        state.replace(todos);

        tracing::debug!(%id, "Todo removed");
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
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
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::AddTodo { id, text } => {
                Self::add(state, id, text);
                SmallVec::new()
            },

            TodoAction::UpdateTodo { id, updated } => {
                Self::update(state, id, updated);
                SmallVec::new()
            },

            TodoAction::RemoveTodo { id } => {
                Self::remove(state, id);
                SmallVec::new()
            },

            // A toggle is an update with the flag flipped
            TodoAction::ToggleTodo { id } => match state.get(id) {
                Some(entry) => smallvec![Effect::send(TodoAction::UpdateTodo {
                    id,
                    updated: entry.todo.toggled(),
                })],
                None => {
                    tracing::debug!(%id, "Toggle target not in list, ignoring");
                    SmallVec::new()
                },
            },
        }
    }
}
