//! # uiflow Testing
//!
//! Testing utilities and helpers for uiflow screens.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - View assertions for rendered frames
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use uiflow_testing::{ReducerTest, assertions, sequential_ids};
//!
//! ReducerTest::new(WatchlistReducer::new())
//!     .with_env(WatchlistEnvironment::new(Arc::new(sequential_ids())))
//!     .given_state(MovieList::new())
//!     .when_action(MovieAction::AddMovie { title: "Heat".into() })
//!     .then_state(|movies| assert_eq!(movies.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations of Environment traits
pub mod mocks {
    use std::sync::atomic::{AtomicU64, Ordering};
    use uiflow_core::environment::IdGenerator;
    use uuid::Uuid;

    /// Id generator producing predictable ids
    ///
    /// The n-th call (1-based) returns [`SequentialIds::id(n)`](SequentialIds::id).
    ///
    /// # Example
    ///
    /// ```
    /// use uiflow_core::environment::IdGenerator;
    /// use uiflow_testing::mocks::SequentialIds;
    ///
    /// let ids = SequentialIds::new();
    /// assert_eq!(ids.next_id(), SequentialIds::id(1));
    /// assert_eq!(ids.next_id(), SequentialIds::id(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        issued: AtomicU64,
    }

    impl SequentialIds {
        /// Create a generator whose first id is `SequentialIds::id(1)`
        #[must_use]
        pub const fn new() -> Self {
            Self {
                issued: AtomicU64::new(0),
            }
        }

        /// Create a generator that continues after `issued` ids
        #[must_use]
        pub const fn starting_after(issued: u64) -> Self {
            Self {
                issued: AtomicU64::new(issued),
            }
        }

        /// The id returned by the n-th call
        #[must_use]
        pub const fn id(n: u64) -> Uuid {
            Uuid::from_u128(n as u128)
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> Uuid {
            let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            Self::id(n)
        }
    }

    /// Create a fresh sequential id generator for tests
    #[must_use]
    pub const fn sequential_ids() -> SequentialIds {
        SequentialIds::new()
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a tracing subscriber that writes through the test harness
    ///
    /// Safe to call from every test; only the first call installs it.
    /// Verbosity follows `RUST_LOG`.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// View assertions for rendered frames
pub mod view {
    use uiflow_core::view::Node;

    /// Assert that a text or button shows exactly `text`
    ///
    /// # Panics
    ///
    /// Panics if no node shows `text`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_shows<A>(frame: &Node<A>, text: &str) {
        assert!(frame.has_text(text), "Expected {text:?} on screen, frame was:\n{frame}");
    }

    /// Assert that no text or button shows `text`
    ///
    /// # Panics
    ///
    /// Panics if a node shows `text`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_hidden<A>(frame: &Node<A>, text: &str) {
        assert!(!frame.has_text(text), "Expected {text:?} to be hidden, frame was:\n{frame}");
    }

    /// Assert that the button labelled `label` is present and has the given state
    ///
    /// # Panics
    ///
    /// Panics if the button is missing or its enabled state differs.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_button_enabled<A>(frame: &Node<A>, label: &str, expected: bool) {
        match frame.find_button(label) {
            Some(Node::Button { enabled, .. }) => assert_eq!(
                *enabled, expected,
                "Button {label:?} enabled = {enabled}, expected {expected}"
            ),
            _ => panic!("No button labelled {label:?}, frame was:\n{frame}"),
        }
    }
}

/// Property-based testing strategies
pub mod properties {
    use proptest::prelude::*;

    /// Arbitrary single-line user input, including the empty string
    pub fn text_input() -> impl Strategy<Value = String> {
        "[ -~]{0,24}"
    }
}

// Re-export commonly used items
pub use mocks::{sequential_ids, SequentialIds};
