//! # Todo Store Runtime
//!
//! Runtime implementation for the todo store.
//!
//! This crate provides the [`Store`] that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer and feeds effect actions back
//! - **Revisions**: A watch channel bumped once per completed dispatch, used
//!   by presentation code to know when to re-derive its views
//! - **Lifecycle**: A store is mounted when created and stops accepting
//!   actions once unmounted
//!
//! ## Example
//!
//! ```ignore
//! use todo_store_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use todo_store_core::{effect::Effect, reducer::Reducer};
use tokio::sync::RwLock;

pub use store::Store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// The store is not mounted
        ///
        /// Returned by `send()` once the store has been unmounted. Reaching
        /// this is a programming error on the caller's side.
        #[error("no service provider: store is not mounted")]
        NoProvider,

        /// A single dispatch fed back more actions than the configured limit
        ///
        /// State changes made before the limit was hit are kept.
        #[error("feedback limit of {0} actions exceeded in a single dispatch")]
        FeedbackLimit(usize),
    }
}

pub use error::StoreError;

/// Configuration for Store behavior
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use todo_store_runtime::StoreConfig;
///
/// let limit = NonZeroUsize::new(8).unwrap();
/// let config = StoreConfig::default().with_feedback_limit(limit);
/// assert_eq!(config.feedback_limit.get(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of actions fed back by effects during one dispatch
    ///
    /// At least one, so an action that forwards to another always completes.
    pub feedback_limit: NonZeroUsize,
}

impl StoreConfig {
    /// Feedback limit used by [`StoreConfig::default`]
    pub const DEFAULT_FEEDBACK_LIMIT: NonZeroUsize = NonZeroUsize::MIN.saturating_add(63);

    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(feedback_limit: NonZeroUsize) -> Self {
        Self { feedback_limit }
    }

    /// Set the feedback limit
    #[must_use]
    pub const fn with_feedback_limit(mut self, limit: NonZeroUsize) -> Self {
        self.feedback_limit = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FEEDBACK_LIMIT)
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Arc, AtomicBool, Effect, Ordering, Reducer, RwLock, StoreConfig, StoreError};
    use std::collections::VecDeque;
    use std::marker::PhantomData;
    use tokio::sync::watch;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, one dispatch at a time)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (feedback loop, finished before `send` returns)
    /// 5. Revision counter (bumped after every dispatch)
    ///
    /// Cloning a Store yields another handle to the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        config: StoreConfig,
        mounted: Arc<AtomicBool>,
        revision: Arc<watch::Sender<u64>>,
        _action: PhantomData<fn(A)>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// The store starts mounted, at revision 0, with the default
        /// [`StoreConfig`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            let (revision, _) = watch::channel(0);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                config,
                mounted: Arc::new(AtomicBool::new(true)),
                revision: Arc::new(revision),
                _action: PhantomData,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer, then every action fed back through
        /// [`Effect::Send`] in order, all under one write lock. The revision
        /// is bumped once when the dispatch finishes.
        ///
        /// # Errors
        ///
        /// - [`StoreError::NoProvider`] if the store has been unmounted
        /// - [`StoreError::FeedbackLimit`] if effects fed back more actions
        ///   than [`StoreConfig::feedback_limit`]
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            if !self.is_mounted() {
                tracing::warn!("Rejected action: store is not mounted");
                metrics::counter!("store.unmounted.rejected_actions").increment(1);
                return Err(StoreError::NoProvider);
            }

            tracing::debug!("Processing action");
            metrics::counter!("store.commands.total").increment(1);

            let result = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");
                self.dispatch(&mut state, action)
            };

            self.revision.send_modify(|revision| *revision += 1);
            tracing::debug!(revision = self.revision(), "Action processing completed");

            result
        }

        fn dispatch(&self, state: &mut S, action: A) -> Result<(), StoreError> {
            let mut pending = VecDeque::from([action]);
            let mut fed_back = 0_usize;
            let mut first = true;
            let limit = self.config.feedback_limit.get();

            while let Some(action) = pending.pop_front() {
                if !first {
                    fed_back += 1;
                    if fed_back > limit {
                        tracing::error!(limit, "Feedback limit exceeded, dropping remaining actions");
                        return Err(StoreError::FeedbackLimit(limit));
                    }
                }
                first = false;

                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(state, action, &*self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                for effect in effects {
                    Self::enqueue(effect, &mut pending);
                }
            }

            Ok(())
        }

        fn enqueue(effect: Effect<A>, pending: &mut VecDeque<A>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                },
                Effect::Send(action) => {
                    tracing::trace!("Executing Effect::Send");
                    pending.push_back(*action);
                },
                Effect::Sequential(effects) => {
                    tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                    for effect in effects {
                        Self::enqueue(effect, pending);
                    }
                },
            }
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// The injected environment
        #[must_use]
        pub fn environment(&self) -> &E {
            &*self.environment
        }

        /// Number of dispatches completed so far
        #[must_use]
        pub fn revision(&self) -> u64 {
            *self.revision.borrow()
        }

        /// Watch the revision counter
        ///
        /// The receiver is marked changed after every completed dispatch.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<u64> {
            self.revision.subscribe()
        }

        /// Whether the store still accepts actions
        #[must_use]
        pub fn is_mounted(&self) -> bool {
            self.mounted.load(Ordering::Acquire)
        }

        /// Stop accepting actions
        ///
        /// Affects every handle cloned from this store. State stays readable.
        pub fn unmount(&self) {
            if self.mounted.swap(false, Ordering::AcqRel) {
                tracing::info!(revision = self.revision(), "Store unmounted");
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                config: self.config.clone(),
                mounted: Arc::clone(&self.mounted),
                revision: Arc::clone(&self.revision),
                _action: PhantomData,
            }
        }
    }
}
