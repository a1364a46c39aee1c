//! # Todo Store Core
//!
//! Core traits and types for the todo store.
//!
//! This crate provides the fundamental abstractions the store is built from:
//!
//! - **State**: The domain state owned by a store
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Descriptions of follow-up work (not execution)
//! - **Environment**: Injected dependencies via traits
//! - **Projection**: Read-only, predicate-based views over a list held in state
//!
//! ## Example
//!
//! ```
//! use todo_store_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Default)]
//! struct Tally {
//!     items: Vec<String>,
//! }
//!
//! enum TallyAction {
//!     Push(String),
//! }
//!
//! struct TallyReducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = Tally;
//!     type Action = TallyAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Tally,
//!         action: TallyAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<TallyAction>; 4]> {
//!         match action {
//!             TallyAction::Push(item) => state.items.push(item),
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = Tally::default();
//! TallyReducer.reduce(&mut state, TallyAction::Push("a".into()), &());
//! assert_eq!(state.items, vec!["a".to_string()]);
//! ```

// Re-export commonly used types
pub use smallvec::{SmallVec, smallvec};

/// Read-only views derived from state
pub mod projection;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Updates state in place and returns effect descriptions
        /// for the runtime to execute.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values returned by reducers and executed by the runtime
/// before the dispatch that produced them completes.
pub mod effect {
    /// Effect type - describes follow-up work to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer within the same dispatch
        Send(Box<Action>),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Feed `action` back into the reducer
        #[must_use]
        pub fn send(action: Action) -> Self {
            Self::Send(Box::new(action))
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Self {
            Self::Sequential(effects)
        }

        /// Whether this effect does nothing when executed
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Send(_) => false,
                Self::Sequential(effects) => effects.iter().all(Self::is_none),
            }
        }

        /// Flatten into the actions this effect feeds back, in execution order
        #[must_use]
        pub fn into_actions(self) -> Vec<Action> {
            let mut actions = Vec::new();
            self.collect_into(&mut actions);
            actions
        }

        fn collect_into(self, actions: &mut Vec<Action>) {
            match self {
                Self::None => {},
                Self::Send(action) => actions.push(*action),
                Self::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_into(actions);
                    }
                },
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// External dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Source of identifiers for newly created entities
    ///
    /// Identifiers handed out by one generator must be unique and
    /// strictly increasing.
    pub trait IdGenerator: Send + Sync {
        /// Allocate the next identifier
        fn next_id(&self) -> u64;
    }

    /// Monotonic counter starting at 1
    #[derive(Debug)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl SequentialIds {
        /// Counter whose first id is 1
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(1)
        }

        /// Counter whose first id is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }
    }

    impl Default for SequentialIds {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> u64 {
            self.next.fetch_add(1, Ordering::AcqRel)
        }
    }
}
