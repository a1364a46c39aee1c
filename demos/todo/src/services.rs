//! Mutation services handed to presentation code.
//!
//! Presentation code never reaches for a global store. Whatever needs to
//! change the list receives a [`TodoServices`] implementation as a
//! parameter: a live [`TodoStore`], or [`NoProvider`] where no store exists.

use crate::projection::TodoViews;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{Todo, TodoAction, TodoEntry, TodoId, TodoState};
use std::future::{Future, ready};
use std::sync::Arc;
use thiserror::Error;
use todo_store_runtime::{Store, StoreConfig, StoreError};
use tokio::sync::watch;

/// Errors returned by todo services
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No store backs these services (never mounted, or unmounted)
    #[error("no service provider")]
    NoProvider,

    /// The id generator handed out an id already in the list
    #[error("todo id {0} is already in use")]
    DuplicateId(TodoId),

    /// The store rejected the dispatch
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NoProvider => Self::NoProvider,
            other => Self::Store(other),
        }
    }
}

/// The capability set presentation code uses to change the list
///
/// Targets that are not in the list are ignored: `update_todo`,
/// `remove_todo` and `toggle_todo` succeed without changing anything.
pub trait TodoServices {
    /// Appends a new unresolved todo and returns its id
    ///
    /// Fails with [`ServiceError::DuplicateId`] rather than dropping the todo
    /// if the freshly generated id is already taken.
    fn add_todo(&self, text: String) -> impl Future<Output = Result<TodoId, ServiceError>> + Send;

    /// Replaces the todo at `id` with `updated`
    fn update_todo(
        &self,
        id: TodoId,
        updated: Todo,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Removes the todo at `id`
    fn remove_todo(&self, id: TodoId) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Flips `resolved` on the todo at `id`
    fn toggle_todo(&self, id: TodoId) -> impl Future<Output = Result<(), ServiceError>> + Send;
}

/// Services with no store behind them
///
/// Every call fails with [`ServiceError::NoProvider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProvider;

impl TodoServices for NoProvider {
    fn add_todo(&self, _text: String) -> impl Future<Output = Result<TodoId, ServiceError>> + Send {
        ready(Err(ServiceError::NoProvider))
    }

    fn update_todo(
        &self,
        _id: TodoId,
        _updated: Todo,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send {
        ready(Err(ServiceError::NoProvider))
    }

    fn remove_todo(&self, _id: TodoId) -> impl Future<Output = Result<(), ServiceError>> + Send {
        ready(Err(ServiceError::NoProvider))
    }

    fn toggle_todo(&self, _id: TodoId) -> impl Future<Output = Result<(), ServiceError>> + Send {
        ready(Err(ServiceError::NoProvider))
    }
}

/// Runtime store specialised to the todo list
pub type TodoRuntime = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Handle on a mounted todo store
///
/// Clones share the same list. Once [`unmount`](Self::unmount) is called on
/// any clone, every service call fails with [`ServiceError::NoProvider`].
#[derive(Clone)]
pub struct TodoStore {
    store: TodoRuntime,
}

impl TodoStore {
    /// Mounts an empty store
    #[must_use]
    pub fn mount(env: TodoEnvironment) -> Self {
        Self::mount_with(StoreConfig::default(), env)
    }

    /// Mounts an empty store with custom configuration
    #[must_use]
    pub fn mount_with(config: StoreConfig, env: TodoEnvironment) -> Self {
        tracing::info!(feedback_limit = config.feedback_limit.get(), "Mounting todo store");
        Self {
            store: Store::with_config(TodoState::new(), TodoReducer::new(), env, config),
        }
    }

    /// Current list
    pub async fn snapshot(&self) -> Arc<Vec<TodoEntry>> {
        self.store.state(TodoState::snapshot).await
    }

    /// Both views over the current list
    pub async fn views(&self) -> TodoViews {
        TodoViews::new(self.snapshot().await)
    }

    /// Watch for completed changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    /// Whether services still work
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.store.is_mounted()
    }

    /// Tears the store down; state stays readable
    pub fn unmount(&self) {
        self.store.unmount();
    }

    async fn dispatch(&self, action: TodoAction) -> Result<(), ServiceError> {
        self.store.send(action).await.map_err(|error| {
            tracing::error!(%error, "Todo action rejected");
            ServiceError::from(error)
        })
    }
}

impl TodoServices for TodoStore {
    async fn add_todo(&self, text: String) -> Result<TodoId, ServiceError> {
        if !self.is_mounted() {
            return Err(ServiceError::NoProvider);
        }
        let id = self.store.environment().next_id();
        if self.store.state(|state| state.contains(id)).await {
            tracing::error!(%id, "Generated todo id is already in use");
            return Err(ServiceError::DuplicateId(id));
        }
        self.dispatch(TodoAction::AddTodo { id, text }).await?;
        Ok(id)
    }

    async fn update_todo(&self, id: TodoId, updated: Todo) -> Result<(), ServiceError> {
        self.dispatch(TodoAction::UpdateTodo { id, updated }).await
    }

    async fn remove_todo(&self, id: TodoId) -> Result<(), ServiceError> {
        self.dispatch(TodoAction::RemoveTodo { id }).await
    }

    async fn toggle_todo(&self, id: TodoId) -> Result<(), ServiceError> {
        self.dispatch(TodoAction::ToggleTodo { id }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_store_core::environment::IdGenerator;
    use todo_store_testing::RecordingIds;

    struct SameId;

    impl IdGenerator for SameId {
        fn next_id(&self) -> u64 {
            7
        }
    }

    fn mounted() -> TodoStore {
        TodoStore::mount(TodoEnvironment::new(Arc::new(RecordingIds::new())))
    }

    #[tokio::test]
    async fn test_no_provider_rejects_every_call() {
        let services = NoProvider;
        let id = TodoId::new(1);

        assert_eq!(services.add_todo("a".into()).await, Err(ServiceError::NoProvider));
        assert_eq!(
            services.update_todo(id, Todo::new("a")).await,
            Err(ServiceError::NoProvider)
        );
        assert_eq!(services.remove_todo(id).await, Err(ServiceError::NoProvider));
        assert_eq!(services.toggle_todo(id).await, Err(ServiceError::NoProvider));
    }

    #[tokio::test]
    async fn test_add_returns_increasing_ids() {
        let store = mounted();
        let first = store.add_todo("a".into()).await.unwrap();
        let second = store.add_todo("b".into()).await.unwrap();

        assert!(second > first);
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.iter().map(|e| e.id).collect::<Vec<_>>(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_flag() {
        let store = mounted();
        let id = store.add_todo("a".into()).await.unwrap();

        store.toggle_todo(id).await.unwrap();
        assert_eq!(store.views().await.counts(), (0, 1));

        store.toggle_todo(id).await.unwrap();
        assert_eq!(store.views().await.counts(), (1, 0));
    }

    #[tokio::test]
    async fn test_unmounted_store_behaves_like_no_provider() {
        let store = mounted();
        let id = store.add_todo("a".into()).await.unwrap();
        store.unmount();

        assert_eq!(store.add_todo("b".into()).await, Err(ServiceError::NoProvider));
        assert_eq!(store.remove_todo(id).await, Err(ServiceError::NoProvider));
        assert_eq!(store.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_add_after_unmount_allocates_no_id() {
        let ids = Arc::new(RecordingIds::new());
        let store = TodoStore::mount(TodoEnvironment::new(ids.clone()));
        store.unmount();

        let _ = store.add_todo("a".into()).await;
        assert!(ids.issued().is_empty());
    }

    #[tokio::test]
    async fn test_add_with_taken_id_is_refused() {
        let store = TodoStore::mount(TodoEnvironment::new(Arc::new(SameId)));

        assert_eq!(store.add_todo("a".into()).await, Ok(TodoId::new(7)));
        assert_eq!(
            store.add_todo("b".into()).await,
            Err(ServiceError::DuplicateId(TodoId::new(7)))
        );

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].todo.text, "a");
    }

    #[test]
    fn test_store_error_mapping() {
        assert_eq!(ServiceError::from(StoreError::NoProvider), ServiceError::NoProvider);
        assert_eq!(
            ServiceError::from(StoreError::FeedbackLimit(3)),
            ServiceError::Store(StoreError::FeedbackLimit(3))
        );
    }
}
