//! In-memory todo list built on the todo store.
//!
//! Todos are added, toggled between the "todo" and "complete" lists, and
//! removed. State is a single list owned by a [`TodoStore`]; the two lists on
//! screen are projections recomputed from it after every change.
//!
//! - [`types`]: `Todo`, `TodoId`, `TodoState`, `TodoAction`
//! - [`reducer`]: how actions change the list
//! - [`projection`]: the incomplete/complete views
//! - [`services`]: the mutation interface handed to presentation code
//! - [`view`], [`command`]: the terminal front end
//!
//! # Quick Start
//!
//! ```
//! use todo::{TodoEnvironment, TodoServices, TodoStore};
//!
//! # async fn example() -> Result<(), todo::ServiceError> {
//! let store = TodoStore::mount(TodoEnvironment::default());
//!
//! let milk = store.add_todo("buy milk".to_string()).await?;
//! store.add_todo("walk the dog".to_string()).await?;
//! store.toggle_todo(milk).await?;
//!
//! let views = store.views().await;
//! assert_eq!(views.incomplete().count(), 1);
//! assert_eq!(views.complete().count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod projection;
pub mod reducer;
pub mod services;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::TodoConfig;
pub use projection::TodoViews;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use services::{NoProvider, ServiceError, TodoServices, TodoStore};
pub use types::{Todo, TodoAction, TodoEntry, TodoId, TodoState};
pub use view::{TodoForm, render};
