//! Domain types for the water counter screen.

use serde::{Deserialize, Serialize};
use uiflow_macros::Action;

/// Glasses of water drunk today, plus whether the wellness task was dismissed
///
/// Both fields survive a configuration change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterState {
    /// Glasses drunk, between 0 and the configured maximum
    pub count: u8,
    /// Whether the banner was closed during the current streak
    pub task_dismissed: bool,
}

impl WaterState {
    /// Creates a state with no glasses and the banner not yet dismissed
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            task_dismissed: false,
        }
    }

    /// Whether the wellness task banner is on screen
    ///
    /// The banner belongs to the part of the screen that only exists once at
    /// least one glass was drunk.
    #[must_use]
    pub const fn task_visible(&self) -> bool {
        self.count > 0 && !self.task_dismissed
    }
}

/// Actions driving the water counter
#[derive(Action, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaterAction {
    /// "Add one" was clicked
    AddGlass,
    /// "Clear water count" was clicked
    Reset,
    /// The banner's close button was clicked
    DismissTask,
}

/// Configuration for the water counter screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListCheckConfig {
    /// Upper bound of the counter
    pub max_glasses: u8,
    /// Text of the wellness task banner
    pub task_name: String,
}

impl ListCheckConfig {
    /// Default upper bound of the counter
    pub const DEFAULT_MAX_GLASSES: u8 = 10;

    /// Default wellness task
    pub const DEFAULT_TASK_NAME: &'static str = "Have you taken your 15 minute walk today?";

    /// Set the upper bound of the counter
    #[must_use]
    pub const fn with_max_glasses(mut self, max_glasses: u8) -> Self {
        self.max_glasses = max_glasses;
        self
    }

    /// Set the banner text
    #[must_use]
    pub fn with_task_name(mut self, task_name: impl Into<String>) -> Self {
        self.task_name = task_name.into();
        self
    }
}

impl Default for ListCheckConfig {
    fn default() -> Self {
        Self {
            max_glasses: Self::DEFAULT_MAX_GLASSES,
            task_name: Self::DEFAULT_TASK_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_visibility() {
        assert!(!WaterState::new().task_visible());
        assert!(
            WaterState {
                count: 1,
                task_dismissed: false
            }
            .task_visible()
        );
        assert!(
            !WaterState {
                count: 3,
                task_dismissed: true
            }
            .task_visible()
        );
    }

    #[test]
    fn config_builders() {
        let config = ListCheckConfig::default().with_max_glasses(3).with_task_name("Stretch");

        assert_eq!(config.max_glasses, 3);
        assert_eq!(config.task_name, "Stretch");
        assert_eq!(ListCheckConfig::default().max_glasses, 10);
    }
}
