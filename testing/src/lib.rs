//! # Todos Testing
//!
//! Testing utilities and helpers for the Composable Todos architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Property-based testing strategies
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use todos_testing::{ReducerTest, SequentialIdGenerator};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(SequentialIdGenerator::new())))
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::CommitDraft { text: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.count(), 1))
//!     .run();
//! ```

use todos_core::Uuid;
use todos_core::environment::IdGenerator;


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{IdGenerator, Uuid};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Deterministic id generator for tests
    ///
    /// Hands out `00000000-0000-0000-0000-000000000001`, `...0002`, and so on.
    ///
    /// # Example
    ///
    /// ```
    /// use todos_testing::mocks::SequentialIdGenerator;
    /// use todos_core::environment::IdGenerator;
    /// use todos_core::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.next_id(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is 1
        #[must_use]
        pub const fn new() -> Self {
            Self {
                issued: AtomicU64::new(0),
            }
        }

        /// The id the `n`th call (1-based) returns
        #[must_use]
        #[allow(clippy::cast_lossless)] // `From` is not const
        pub const fn nth(n: u64) -> Uuid {
            Uuid::from_u128(n as u128)
        }

        /// How many ids have been handed out
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.issued.load(Ordering::Relaxed)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
            Self::nth(n)
        }
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Short human-entered text with at least one non-whitespace character
    /// and no surrounding whitespace.
    pub fn title() -> impl Strategy<Value = String> {
        "[A-Za-z0-9]([A-Za-z0-9 .,!?'-]{0,38}[A-Za-z0-9.!?])?"
    }

    /// Text made only of whitespace (possibly empty)
    pub fn blank() -> impl Strategy<Value = String> {
        "[ \t\n]{0,8}"
    }

    /// A title padded with whitespace on either side
    pub fn padded_title() -> impl Strategy<Value = (String, String)> {
        (blank(), title(), blank()).prop_map(|(lead, title, trail)| {
            (format!("{lead}{title}{trail}"), title)
        })
    }
}

// Re-export commonly used items
pub use mocks::SequentialIdGenerator;
