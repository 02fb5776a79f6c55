//! Property tests for the water counter state holder

use listcheck::{ListCheckEnvironment, WaterAction, WaterReducer, WaterState};
use proptest::prelude::*;
use uiflow_core::Reducer;

fn water_action() -> impl Strategy<Value = WaterAction> {
    prop_oneof![
        3 => Just(WaterAction::AddGlass),
        1 => Just(WaterAction::Reset),
        1 => Just(WaterAction::DismissTask),
    ]
}

proptest! {
    #[test]
    fn count_stays_within_bounds(actions in prop::collection::vec(water_action(), 0..64)) {
        let env = ListCheckEnvironment::default();
        let mut state = WaterState::new();

        for action in actions {
            let _ = WaterReducer::new().reduce(&mut state, action, &env);
            prop_assert!(state.count <= env.config.max_glasses);
        }
    }

    #[test]
    fn banner_hidden_exactly_when_dismissed_or_empty(actions in prop::collection::vec(water_action(), 0..64)) {
        let env = ListCheckEnvironment::default();
        let mut state = WaterState::new();
        // Whether the banner was closed since the last reset
        let mut closed_this_streak = false;

        for action in actions {
            match action {
                WaterAction::Reset => closed_this_streak = false,
                WaterAction::DismissTask if state.count > 0 => closed_this_streak = true,
                _ => {},
            }
            let _ = WaterReducer::new().reduce(&mut state, action, &env);

            prop_assert_eq!(state.task_visible(), state.count > 0 && !closed_this_streak);
        }
    }
}
