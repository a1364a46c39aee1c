//! # Todo Store Testing
//!
//! Testing utilities and helpers for the todo store.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then builder for reducers
//! - Assertion helpers for effects
//! - Mock implementations of Environment traits
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use todo_store_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::AddTodo { id, text: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

/// Given-When-Then testing for reducers
pub mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
pub mod mocks {
    use std::sync::Mutex;
    use todo_store_core::environment::{IdGenerator, SequentialIds};

    /// Id generator that remembers every id it hands out
    ///
    /// # Example
    ///
    /// ```
    /// use todo_store_testing::mocks::RecordingIds;
    /// use todo_store_core::environment::IdGenerator;
    ///
    /// let ids = RecordingIds::starting_at(10);
    /// ids.next_id();
    /// ids.next_id();
    /// assert_eq!(ids.issued(), vec![10, 11]);
    /// ```
    #[derive(Debug, Default)]
    pub struct RecordingIds {
        ids: SequentialIds,
        issued: Mutex<Vec<u64>>,
    }

    impl RecordingIds {
        /// Recorder whose first id is 1
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Recorder whose first id is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                ids: SequentialIds::starting_at(first),
                issued: Mutex::new(Vec::new()),
            }
        }

        /// Every id handed out so far, oldest first
        #[must_use]
        pub fn issued(&self) -> Vec<u64> {
            self.issued
                .lock()
                .map(|issued| issued.clone())
                .unwrap_or_default()
        }
    }

    impl IdGenerator for RecordingIds {
        fn next_id(&self) -> u64 {
            let id = self.ids.next_id();
            if let Ok(mut issued) = self.issued.lock() {
                issued.push(id);
            }
            id
        }
    }
}

pub use mocks::RecordingIds;

/// Install a test-friendly tracing subscriber
///
/// Honours `RUST_LOG`; output goes through the test harness capture.
/// Safe to call from every test, only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
