//! Terminal rendering of the two views, and the entry form.

use crate::projection::{COMPLETE, INCOMPLETE, TodoViews};
use crate::services::{ServiceError, TodoServices};
use crate::types::{TodoEntry, TodoId};
use todo_store_core::projection::Projection;

/// Maps the row numbers printed by [`render`] back to todo ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowIndex {
    ids: Vec<TodoId>,
}

impl RowIndex {
    /// Id shown on 1-based `row`, if any
    #[must_use]
    pub fn get(&self, row: usize) -> Option<TodoId> {
        row.checked_sub(1).and_then(|index| self.ids.get(index).copied())
    }
}

/// Output of one render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Text to print
    pub text: String,
    /// Row numbers used in `text`
    pub rows: RowIndex,
}

/// Renders the incomplete view then the complete view
///
/// ```text
/// todo
///   1. [ ] buy milk
/// complete
///   2. [x] walk the dog
/// ```
#[must_use]
pub fn render(views: &TodoViews) -> Rendered {
    let mut lines = Vec::with_capacity(views.entries().len() + 2);
    let mut ids = Vec::with_capacity(views.entries().len());

    let sections: [(&str, Vec<&TodoEntry>); 2] = [
        (INCOMPLETE.name(), views.incomplete().collect()),
        (COMPLETE.name(), views.complete().collect()),
    ];

    for (heading, entries) in sections {
        lines.push(heading.to_string());
        for entry in entries {
            ids.push(entry.id);
            let mark = if entry.todo.resolved { "x" } else { " " };
            lines.push(format!("  {}. [{mark}] {}", ids.len(), entry.todo.text));
        }
    }

    Rendered {
        text: lines.join("\n"),
        rows: RowIndex { ids },
    }
}

/// Text entry for new todos
///
/// Submitting hands the current input to
/// [`TodoServices::add_todo`] and clears it once the add went through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    input: String,
}

impl TodoForm {
    /// Empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently entered text
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the entered text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Adds the entered text as a todo
    ///
    /// # Errors
    ///
    /// Returns the service error unchanged; the input is kept in that case.
    pub async fn submit<S: TodoServices>(&mut self, services: &S) -> Result<TodoId, ServiceError> {
        let id = services.add_todo(self.input.clone()).await?;
        self.input.clear();
        Ok(id)
    }
}
