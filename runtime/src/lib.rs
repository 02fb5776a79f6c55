//! # uiflow Runtime
//!
//! Runtime implementation for uiflow screens.
//!
//! This crate provides the Store that owns a screen's state and the
//! Presenter that renders a screen over a Store.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer, executes effects, notifies subscribers
//! - **Presenter**: Renders a `Screen` from Store state and routes UI events back
//!
//! ## Example
//!
//! ```ignore
//! use uiflow_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Redraw whenever the state changes
//! let mut changes = store.subscribe();
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uiflow_core::{action::Action, effect::Effect, reducer::Reducer};

/// Presenter: renders a screen over a store and routes UI events
pub mod presenter;

pub use error::StoreError;
pub use presenter::Presenter;
pub use store::Store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Reducers are total, so nothing here describes a domain failure.
    /// These are lifecycle and snapshot failures only.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store was shut down and no longer accepts actions
        ///
        /// Returned by `send()` after `shutdown()`, i.e. once the owning
        /// screen is destroyed.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// The state change channel closed
        #[error("State change channel closed")]
        ChannelClosed,

        /// Saved state could not be encoded or decoded
        #[error("Saved state could not be processed: {0}")]
        Snapshot(#[from] serde_json::Error),
    }
}

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use uiflow_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_action_broadcast_capacity(64);
/// assert_eq!(config.action_broadcast_capacity, 64);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Number of processed actions buffered for slow action observers
    pub action_broadcast_capacity: usize,
}

impl StoreConfig {
    /// Set the action broadcast capacity
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub const fn with_action_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.action_broadcast_capacity = capacity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            action_broadcast_capacity: 16,
        }
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Action, Arc, AtomicBool, Effect, Ordering, Reducer, RwLock, StoreConfig, StoreError};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use std::collections::VecDeque;
    use tokio::sync::{broadcast, watch};

    /// The Store - state holder for one screen
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`)
    /// 2. Reducer (screen logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    /// 5. Change notification (state revision)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Render-on-change
    ///
    /// Every call to [`Store::send`] is one mutation pass: the action and all
    /// actions fed back through `Effect::Send` are reduced under a single
    /// write lock, then the revision is bumped exactly once. Views subscribe
    /// to the revision and re-render the whole screen when it moves.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        shutdown: Arc<AtomicBool>,
        revision: Arc<watch::Sender<u64>>,
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Action + Clone + Send + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.action_broadcast_capacity.max(1));
            let (revision, _) = watch::channel(0);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                shutdown: Arc::new(AtomicBool::new(false)),
                revision: Arc::new(revision),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires write lock on state
        /// 2. Calls reducer with (state, action, environment)
        /// 3. Reduces every `Effect::Send` follow-up, in order
        /// 4. Bumps the revision and notifies subscribers
        ///
        /// # Returns
        ///
        /// The state revision after this mutation pass.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store was shut down.
        #[tracing::instrument(skip(self, action), fields(action = action.name()), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<u64, StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shut down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            let mut state = self.state.write().await;
            let mut queue = VecDeque::from([action]);

            while let Some(action) = queue.pop_front() {
                if action.is_input() {
                    tracing::trace!(action = action.name(), "Processing input action");
                } else {
                    tracing::debug!(action = action.name(), "Processing action");
                }
                metrics::counter!("store.actions.total", "action" => action.name()).increment(1);

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut *state, action.clone(), &self.environment);
                metrics::histogram!("store.reducer.duration_seconds").record(start.elapsed().as_secs_f64());

                // No receivers is fine: observers are optional
                let _ = self.action_broadcast.send(action);

                for effect in effects {
                    match effect {
                        Effect::None => {},
                        Effect::Send(next) => {
                            tracing::trace!(action = next.name(), "Effect::Send queued follow-up action");
                            queue.push_back(next);
                        },
                    }
                }
            }

            self.revision.send_modify(|revision| *revision += 1);
            let revision = *self.revision.borrow();
            drop(state);

            Ok(revision)
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let movie_count = store.state(|s| s.movies.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Subscribe to state changes
        ///
        /// The receiver sees the revision after each mutation pass.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<u64> {
            self.revision.subscribe()
        }

        /// Current state revision (number of completed mutation passes)
        #[must_use]
        pub fn revision(&self) -> u64 {
            *self.revision.borrow()
        }

        /// Subscribe to every action the reducer processes
        ///
        /// Includes follow-up actions produced by `Effect::Send`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Stop accepting actions
        ///
        /// Called when the owning screen is destroyed. State stays readable.
        pub fn shutdown(&self) {
            if !self.shutdown.swap(true, Ordering::AcqRel) {
                tracing::info!(revision = self.revision(), "Store shut down");
            }
        }

        /// Whether [`Store::shutdown`] was called
        #[must_use]
        pub fn is_shut_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }

        /// Encode the saveable part of the state
        ///
        /// Fields marked `#[serde(skip)]` are not retained.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Snapshot`] if the state cannot be serialized.
        pub async fn save_state(&self) -> Result<Vec<u8>, StoreError>
        where
            S: Serialize,
        {
            let state = self.state.read().await;
            let bytes = serde_json::to_vec(&*state)?;
            tracing::debug!(bytes = bytes.len(), "Saved state");
            Ok(bytes)
        }

        /// Recreate a store from state saved by [`Store::save_state`]
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Snapshot`] if `saved` does not decode into `S`.
        pub fn restore(saved: &[u8], reducer: R, environment: E) -> Result<Self, StoreError>
        where
            S: DeserializeOwned,
        {
            Self::restore_with_config(saved, reducer, environment, StoreConfig::default())
        }

        /// Recreate a store from saved state with custom configuration
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Snapshot`] if `saved` does not decode into `S`.
        pub fn restore_with_config(
            saved: &[u8],
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Result<Self, StoreError>
        where
            S: DeserializeOwned,
        {
            let state: S = serde_json::from_slice(saved)?;
            tracing::info!(bytes = saved.len(), "Restored state");
            Ok(Self::with_config(state, reducer, environment, config))
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
                shutdown: Arc::clone(&self.shutdown),
                revision: Arc::clone(&self.revision),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}
