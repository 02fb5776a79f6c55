//! # uiflow Core
//!
//! Core traits and types for building screens as reducer-driven state machines.
//!
//! A screen is split into a pure state machine and a pure render function.
//! The runtime crate owns the state and wires the two together.
//!
//! ## Core Concepts
//!
//! - **State**: Everything a screen needs to draw itself
//! - **Action**: Every input a screen can receive (clicks, text edits, lifecycle)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work described as a value, executed by the Store
//! - **Environment**: Injected dependencies (id generation)
//! - **Screen**: Pure function `State → Node<Action>`
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow: view → action → reducer → state → view
//! - Explicit Effects (no hidden mutation)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use uiflow_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct ClickState {
//!     clicks: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum ClickAction {
//!     Clicked,
//! }
//!
//! struct ClickReducer;
//!
//! impl Reducer for ClickReducer {
//!     type State = ClickState;
//!     type Action = ClickAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ClickState,
//!         action: ClickAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<ClickAction>; 4]> {
//!         match action {
//!             ClickAction::Clicked => state.clicks += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = ClickState::default();
//! ClickReducer.reduce(&mut state, ClickAction::Clicked, &());
//! assert_eq!(state.clicks, 1);
//! ```

// Re-export commonly used types
pub use smallvec::{smallvec, SmallVec};

/// Reducer composition utilities
pub mod composition;

/// Declarative view tree and the `Screen` trait
pub mod view;

pub use action::Action;
pub use effect::Effect;
pub use reducer::Reducer;
pub use view::{Node, Screen};

/// Action module - Unified input type for reducers
///
/// Actions represent every state transition a screen can go through.
/// `#[derive(Action)]` from `uiflow-macros` implements the trait.
pub mod action {
    /// Metadata every action type exposes to the runtime
    ///
    /// The Store uses it for logging: actions are recorded by name, and
    /// input actions (one per keystroke) are logged at trace level only.
    pub trait Action {
        /// Variant name, e.g. `"AddMovie"`
        fn name(&self) -> &'static str;

        /// Whether this is a high-frequency input event
        fn is_input(&self) -> bool {
            false
        }
    }
}

/// Reducer module - The core trait for screen logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all state transitions and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for screen logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
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
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed by the Store
        ///
        /// Reducers must be total: every action is valid in every state.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Follow-up work descriptions
///
/// Effects are values returned from reducers and executed by the Store.
pub mod effect {
    /// Effect type - describes follow-up work for the Store
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        ///
        /// The Store processes it in the same mutation pass, after the action
        /// that produced it, so subscribers observe a single revision.
        Send(Action),
    }

    impl<Action> Effect<Action> {
        /// Convert the action carried by this effect
        ///
        /// Used when a child reducer is scoped into a parent screen.
        #[must_use]
        pub fn map<B>(self, f: impl FnOnce(Action) -> B) -> Effect<B> {
            match self {
                Effect::None => Effect::None,
                Effect::Send(action) => Effect::Send(f(action)),
            }
        }

        /// Returns true for `Effect::None`
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use uuid::Uuid;

    /// `IdGenerator` trait - abstracts identifier creation for testability
    ///
    /// Records created by reducers get a stable id from the environment so
    /// that later actions can address them unambiguously.
    ///
    /// # Examples
    ///
    /// ```
    /// use uiflow_core::environment::{IdGenerator, RandomIds};
    ///
    /// let ids = RandomIds;
    /// assert_ne!(ids.next_id(), ids.next_id());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Produce a fresh identifier
        fn next_id(&self) -> Uuid;
    }

    /// Production id generator backed by random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RandomIds;

    impl IdGenerator for RandomIds {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
