//! Reducer logic for the water counter.

use crate::types::{ListCheckConfig, WaterAction, WaterState};
use uiflow_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Environment dependencies for the water counter
#[derive(Clone, Debug, Default)]
pub struct ListCheckEnvironment {
    /// Screen configuration
    pub config: ListCheckConfig,
}

impl ListCheckEnvironment {
    /// Creates a new `ListCheckEnvironment`
    #[must_use]
    pub const fn new(config: ListCheckConfig) -> Self {
        Self { config }
    }
}

/// State holder for the water counter
///
/// # Banner lifecycle
///
/// The banner shows while the count is above zero and the user has not
/// closed it. Closing it lasts for the rest of the streak: further glasses
/// keep it hidden. Clearing the count ends the streak, so the next glass
/// brings the banner back.
#[derive(Clone, Debug, Default)]
pub struct WaterReducer;

impl WaterReducer {
    /// Creates a new `WaterReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for WaterReducer {
    type State = WaterState;
    type Action = WaterAction;
    type Environment = ListCheckEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            WaterAction::AddGlass => {
                if state.count < env.config.max_glasses {
                    state.count += 1;
                } else {
                    tracing::debug!(count = state.count, "Glass ignored: limit reached");
                }
            },
            WaterAction::Reset => {
                state.count = 0;
                state.task_dismissed = false;
            },
            WaterAction::DismissTask => {
                if state.count > 0 {
                    state.task_dismissed = true;
                }
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiflow_testing::{assertions, ReducerTest};

    fn state(count: u8, task_dismissed: bool) -> WaterState {
        WaterState { count, task_dismissed }
    }

    #[test]
    fn add_glass_increments() {
        ReducerTest::new(WaterReducer::new())
            .with_env(ListCheckEnvironment::default())
            .given_state(WaterState::new())
            .when_action(WaterAction::AddGlass)
            .then_state(|state| {
                assert_eq!(state.count, 1);
                assert!(state.task_visible());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_glass_is_inert_at_the_limit() {
        ReducerTest::new(WaterReducer::new())
            .with_env(ListCheckEnvironment::default())
            .given_state(state(10, false))
            .when_action(WaterAction::AddGlass)
            .then_state(|state| assert_eq!(state.count, 10))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn limit_follows_config() {
        ReducerTest::new(WaterReducer::new())
            .with_env(ListCheckEnvironment::new(ListCheckConfig::default().with_max_glasses(2)))
            .given_state(WaterState::new())
            .when_actions([WaterAction::AddGlass; 5])
            .then_state(|state| assert_eq!(state.count, 2))
            .run();
    }

    #[test]
    fn reset_clears_count_and_dismissal() {
        ReducerTest::new(WaterReducer::new())
            .with_env(ListCheckEnvironment::default())
            .given_state(state(4, true))
            .when_action(WaterAction::Reset)
            .then_state(|state| assert_eq!(*state, WaterState::new()))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn dismissal_outlives_further_glasses() {
        ReducerTest::new(WaterReducer::new())
            .with_env(ListCheckEnvironment::default())
            .given_state(state(1, false))
            .when_actions([WaterAction::DismissTask, WaterAction::AddGlass, WaterAction::AddGlass])
            .then_state(|state| {
                assert_eq!(state.count, 3);
                assert!(!state.task_visible());
            })
            .run();
    }

    #[test]
    fn dismiss_at_zero_is_noop() {
        ReducerTest::new(WaterReducer::new())
            .with_env(ListCheckEnvironment::default())
            .given_state(WaterState::new())
            .when_actions([WaterAction::DismissTask, WaterAction::AddGlass])
            .then_state(|state| assert!(state.task_visible()))
            .run();
    }
}
