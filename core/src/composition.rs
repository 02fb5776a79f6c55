//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope`**: Embed a component reducer into a screen's state and action
//!
//! A screen is typically assembled from component reducers, each owning a
//! field of the screen state and a variant of the screen action:
//!
//! ```
//! use uiflow_core::{Effect, Reducer, SmallVec, smallvec};
//! use uiflow_core::composition::{combine_reducers, scope};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Clicks(u32);
//!
//! #[derive(Clone, Debug)]
//! enum ClickAction {
//!     Click,
//! }
//!
//! struct ClickReducer;
//!
//! impl Reducer for ClickReducer {
//!     type State = Clicks;
//!     type Action = ClickAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Clicks, _action: ClickAction, _env: &()) -> SmallVec<[Effect<ClickAction>; 4]> {
//!         state.0 += 1;
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Page {
//!     left: Clicks,
//!     right: Clicks,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum PageAction {
//!     Left(ClickAction),
//!     Right(ClickAction),
//! }
//!
//! let page = combine_reducers(vec![
//!     Box::new(scope(
//!         ClickReducer,
//!         |p: &mut Page| &mut p.left,
//!         |a| match a { PageAction::Left(a) => Some(a), PageAction::Right(_) => None },
//!         PageAction::Left,
//!     )),
//!     Box::new(scope(
//!         ClickReducer,
//!         |p: &mut Page| &mut p.right,
//!         |a| match a { PageAction::Right(a) => Some(a), PageAction::Left(_) => None },
//!         PageAction::Right,
//!     )),
//! ]);
//!
//! let mut state = Page::default();
//! page.reduce(&mut state, PageAction::Right(ClickAction::Click), &());
//! assert_eq!(state.left.0, 0);
//! assert_eq!(state.right.0, 1);
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// A type-erased reducer that can be owned by a Store
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and concatenated.
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    /// Number of reducers in the combination
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true if no reducer was combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Embeds a component reducer into a larger screen.
///
/// - `lens` focuses the screen state on the component's state
/// - `extract` picks the parent actions addressed to the component;
///   anything it maps to `None` is ignored by this reducer
/// - `embed` lifts the component's effects back into parent actions
///
/// `embed` is also where a component's outcome gets routed to a sibling:
/// mapping a child's "submitted" action to another component's command
/// turns the child's `Effect::Send` into a cross-component message.
pub fn scope<R, S, A>(
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
    extract: fn(A) -> Option<R::Action>,
    embed: fn(R::Action) -> A,
) -> ScopedReducer<R, S, A>
where
    R: Reducer,
{
    ScopedReducer {
        reducer,
        lens,
        extract,
        embed,
    }
}

/// A reducer that operates on a field of a larger state.
///
/// Created by [`scope`].
pub struct ScopedReducer<R, S, A>
where
    R: Reducer,
{
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
    extract: fn(A) -> Option<R::Action>,
    embed: fn(R::Action) -> A,
}

impl<R, S, A> Reducer for ScopedReducer<R, S, A>
where
    R: Reducer,
{
    type State = S;
    type Action = A;
    type Environment = R::Environment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(child_action) = (self.extract)(action) else {
            return SmallVec::new();
        };

        self.reducer
            .reduce((self.lens)(state), child_action, env)
            .into_iter()
            .map(|effect| effect.map(self.embed))
            .collect()
    }
}
