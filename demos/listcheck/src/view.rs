//! Rendering for the water counter screen.

use crate::types::{ListCheckConfig, WaterAction, WaterState};
use uiflow_core::view::{Icon, Node, Screen};

/// Label of the increment button
pub const ADD_ONE: &str = "Add one";

/// Label of the reset button
pub const CLEAR: &str = "Clear water count";

/// Description of the banner's close button
pub const CLOSE: &str = "Close";

/// Text reporting the current count
#[must_use]
pub fn count_text(count: u8) -> String {
    format!("You've had {count} glasses.")
}

/// Render the wellness task banner
#[must_use]
pub fn task_item(task_name: &str) -> Node<WaterAction> {
    Node::row(vec![
        Node::text(task_name),
        Node::icon_button(Icon::Close, CLOSE, 1.0, WaterAction::DismissTask),
    ])
}

/// The water counter screen
#[derive(Clone, Debug)]
pub struct WaterScreen {
    max_glasses: u8,
    task_name: String,
}

impl WaterScreen {
    /// Creates the screen for `config`
    #[must_use]
    pub fn new(config: &ListCheckConfig) -> Self {
        Self {
            max_glasses: config.max_glasses,
            task_name: config.task_name.clone(),
        }
    }
}

impl Default for WaterScreen {
    fn default() -> Self {
        Self::new(&ListCheckConfig::default())
    }
}

impl Screen for WaterScreen {
    type State = WaterState;
    type Action = WaterAction;

    fn render(&self, state: &WaterState) -> Node<WaterAction> {
        let mut column = Vec::with_capacity(3);

        if state.task_visible() {
            column.push(task_item(&self.task_name));
        }
        if state.count > 0 {
            column.push(Node::text(count_text(state.count)));
        }
        column.push(Node::row(vec![
            Node::button(ADD_ONE, state.count < self.max_glasses, WaterAction::AddGlass),
            Node::button(CLEAR, true, WaterAction::Reset),
        ]));

        Node::column(column)
    }
}
