//! The "todo" and "complete" views of the list.

use crate::types::{TodoEntry, TodoState};
use std::sync::Arc;
use todo_store_core::projection::{Complement, Projected, Projection};

/// Todos whose `resolved` flag is set
#[derive(Debug, Clone, Copy, Default)]
pub struct Completed;

impl Projection for Completed {
    type Item = TodoEntry;

    fn name(&self) -> &'static str {
        "complete"
    }

    fn includes(&self, item: &TodoEntry) -> bool {
        item.todo.resolved
    }
}

/// Todos still open
pub type Incomplete = Complement<Completed>;

/// The complete view
pub static COMPLETE: Completed = Completed;

/// The incomplete view
pub static INCOMPLETE: Incomplete = Complement::new(Completed, "todo");

/// Both views over one snapshot of the list
///
/// Holding the snapshot keeps the views consistent with each other even if
/// the store moves on; build a new `TodoViews` to see later changes.
#[derive(Debug, Clone, Default)]
pub struct TodoViews {
    snapshot: Arc<Vec<TodoEntry>>,
}

impl TodoViews {
    /// Views over `snapshot`
    #[must_use]
    pub const fn new(snapshot: Arc<Vec<TodoEntry>>) -> Self {
        Self { snapshot }
    }

    /// Views over the current list of `state`
    #[must_use]
    pub fn from_state(state: &TodoState) -> Self {
        Self::new(state.snapshot())
    }

    /// Every todo, in store order
    #[must_use]
    pub fn entries(&self) -> &[TodoEntry] {
        &self.snapshot
    }

    /// Open todos, in store order
    pub fn incomplete(&self) -> Projected<'_, Incomplete> {
        INCOMPLETE.project(&self.snapshot)
    }

    /// Resolved todos, in store order
    pub fn complete(&self) -> Projected<'_, Completed> {
        COMPLETE.project(&self.snapshot)
    }

    /// `(incomplete, complete)` counts
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        let complete = COMPLETE.count(&self.snapshot);
        (self.snapshot.len() - complete, complete)
    }
}
