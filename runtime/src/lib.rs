//! # Todos Runtime
//!
//! Runtime implementation for the Composable Todos architecture.
//!
//! This crate provides the Store that coordinates reducer execution,
//! the synchronous feedback loop for effects, and snapshot subscriptions.
//!
//! ## Core Components
//!
//! - **Store**: Owns the canonical state and dispatches actions to the reducer
//! - **Feedback Loop**: Actions produced by `Effect::Send` are reduced in FIFO order
//! - **Subscriptions**: Observers are kept up to date with the latest state snapshot
//!
//! ## Example
//!
//! ```ignore
//! use todos_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Observe snapshots
//! let subscription = store.subscribe(|state| println!("{state:?}"));
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! store.unsubscribe(subscription);
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, TryLockError};
use todos_core::reducer::Reducer;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// The reducer kept producing feedback actions past the configured limit
        ///
        /// State changes applied before the limit was hit are kept and published.
        /// The remaining queued actions are dropped.
        #[error("Feedback loop exceeded {limit} follow-up actions")]
        FeedbackLimitExceeded {
            /// The configured `max_feedback_actions`
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of follow-up actions a single `send` may reduce
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Default bound on follow-up actions per dispatch
    pub const DEFAULT_MAX_FEEDBACK_ACTIONS: usize = 64;

    /// Create a new store configuration
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the maximum number of follow-up actions per dispatch
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FEEDBACK_ACTIONS)
    }
}

/// Handle returned by [`Store::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Snapshot observer
type Subscriber<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Store module - the runtime coordinator
pub mod store {
    use super::{
        Arc, AtomicU64, Mutex, Ordering, PhantomData, PoisonError, Reducer, RwLock, StoreConfig,
        StoreError, Subscriber, Subscription, TryLockError, VecDeque,
    };

    /// Current state plus the number of dispatches that produced it
    struct Versioned<S> {
        version: u64,
        state: Arc<S>,
    }

    struct Observer<S> {
        id: Subscription,
        callback: Subscriber<S>,
        /// Version of the last snapshot delivered; held while delivering
        seen: Mutex<u64>,
    }

    struct Inner<S, E, R> {
        state: RwLock<Versioned<S>>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        subscribers: RwLock<Vec<Arc<Observer<S>>>>,
        next_subscription: AtomicU64,
    }

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (an immutable snapshot behind an `RwLock`, replaced on every dispatch)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (synchronous feedback loop)
    /// 5. Subscribers brought up to the latest snapshot after every dispatch
    ///
    /// Cloning a Store is cheap and yields another handle to the same state.
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
        inner: Arc<Inner<S, E, R>>,
        _action: PhantomData<fn(A)>,
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                inner: Arc::clone(&self.inner),
                _action: PhantomData,
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone,
        A: std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// # Example
        ///
        /// ```ignore
        /// let config = StoreConfig::default().with_max_feedback_actions(8);
        /// let store = Store::with_config(MyState::default(), MyReducer, env, config);
        /// ```
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                inner: Arc::new(Inner {
                    state: RwLock::new(Versioned {
                        version: 0,
                        state: Arc::new(initial_state),
                    }),
                    reducer,
                    environment,
                    config,
                    subscribers: RwLock::new(Vec::new()),
                    next_subscription: AtomicU64::new(0),
                }),
                _action: PhantomData,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Reduces every action produced by `Effect::Send`, in FIFO order
        /// 4. Releases the lock and brings every subscriber up to the latest snapshot
        ///
        /// Returns the number of actions reduced, follow-ups included.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if the reducer keeps
        /// producing follow-up actions past `max_feedback_actions`. The snapshot
        /// reached so far is still published.
        ///
        /// # Panics
        ///
        /// If the reducer panics, the panic propagates. A later `send` recovers
        /// the state as the panicking reducer left it.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&self, action: A) -> Result<usize, StoreError> {
            let limit = self.inner.config.max_feedback_actions;

            let outcome = {
                let mut guard = self
                    .inner
                    .state
                    .write()
                    .unwrap_or_else(PoisonError::into_inner);
                tracing::trace!("Acquired write lock on state");

                // Copy-on-write: subscribers holding the previous snapshot keep it intact
                let state = Arc::make_mut(&mut guard.state);
                let mut queue = VecDeque::from([action]);
                let mut reduced = 0_usize;
                let mut outcome = Ok(());

                while let Some(action) = queue.pop_front() {
                    if reduced > limit {
                        tracing::warn!(
                            limit,
                            dropped = queue.len() + 1,
                            "Feedback limit exceeded, dropping queued actions"
                        );
                        outcome = Err(StoreError::FeedbackLimitExceeded { limit });
                        break;
                    }

                    tracing::debug!(?action, "Reducing action");
                    let effects = self.inner.reducer.reduce(state, action, &self.inner.environment);
                    reduced += 1;

                    let mut feedback = Vec::new();
                    for effect in effects {
                        effect.into_actions(&mut feedback);
                    }
                    if !feedback.is_empty() {
                        tracing::trace!("Reducer produced {} follow-up actions", feedback.len());
                    }
                    queue.extend(feedback);
                }

                guard.version += 1;
                outcome.map(|()| reduced)
            };

            self.publish();
            outcome
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.items.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let snapshot = self.snapshot();
            f(&snapshot)
        }

        /// The current state snapshot
        ///
        /// The snapshot is immutable; later dispatches replace it rather than
        /// mutating it.
        #[must_use]
        pub fn snapshot(&self) -> Arc<S> {
            self.latest().1
        }

        fn latest(&self) -> (u64, Arc<S>) {
            let guard = self
                .inner
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            (guard.version, Arc::clone(&guard.state))
        }

        /// Register an observer called with new snapshots
        ///
        /// Observers run after the store has released its locks, so they may
        /// read the store or send further actions. An observer is never handed
        /// a snapshot older than one it has already seen, and the last call it
        /// receives carries the latest state.
        pub fn subscribe<F>(&self, observer: F) -> Subscription
        where
            F: Fn(&S) + Send + Sync + 'static,
        {
            let id = Subscription(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
            self.inner
                .subscribers
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(Arc::new(Observer {
                    id,
                    callback: Arc::new(observer),
                    seen: Mutex::new(0),
                }));
            tracing::debug!(subscription = id.0, "Subscriber registered");
            id
        }

        /// Remove an observer. Returns false if it was not registered.
        pub fn unsubscribe(&self, subscription: Subscription) -> bool {
            let mut subscribers = self
                .inner
                .subscribers
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let before = subscribers.len();
            subscribers.retain(|observer| observer.id != subscription);
            before != subscribers.len()
        }

        /// Number of registered observers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.inner
                .subscribers
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        fn publish(&self) {
            let observers: Vec<Arc<Observer<S>>> = self
                .inner
                .subscribers
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .map(Arc::clone)
                .collect();

            tracing::trace!("Publishing snapshot to {} subscribers", observers.len());
            for observer in &observers {
                self.deliver(observer);
            }
        }

        /// Bring `observer` up to the latest snapshot
        ///
        /// Whoever holds the observer's lock keeps delivering until it has seen
        /// the latest version, so a re-entrant or concurrent `send` that finds
        /// the lock taken can skip it.
        fn deliver(&self, observer: &Observer<S>) {
            loop {
                let mut seen = match observer.seen.try_lock() {
                    Ok(guard) => guard,
                    Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                    Err(TryLockError::WouldBlock) => return,
                };

                loop {
                    let (version, snapshot) = self.latest();
                    if version <= *seen {
                        break;
                    }
                    *seen = version;
                    (observer.callback)(&snapshot);
                }

                let delivered = *seen;
                drop(seen);

                // A send that found the lock taken after our last check
                if self.latest().0 <= delivered {
                    return;
                }
            }
        }
    }
}

pub use store::Store;
