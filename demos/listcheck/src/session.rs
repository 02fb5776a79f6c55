//! An interactive water counter session.

use crate::cli::Command;
use crate::reducer::{ListCheckEnvironment, WaterReducer};
use crate::types::{ListCheckConfig, WaterAction, WaterState};
use crate::view::{WaterScreen, ADD_ONE, CLEAR, CLOSE};
use uiflow_core::view::Node;
use uiflow_runtime::{Presenter, Store, StoreError};

/// Store backing the water counter screen
pub type WaterStore = Store<WaterState, WaterAction, ListCheckEnvironment, WaterReducer>;

/// Water counter screen bound to its store
pub type WaterPresenter = Presenter<WaterScreen, WaterReducer>;

/// What a handled command asks of the terminal loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    /// An event was delivered; redraw
    Updated,
    /// The control is hidden or disabled
    Ignored,
    /// Print the command list
    Help,
    /// Leave the loop
    Quit,
}

/// A running water counter screen
pub struct Session {
    presenter: WaterPresenter,
    environment: ListCheckEnvironment,
}

impl Session {
    /// Cold-start the screen with no glasses
    #[must_use]
    pub fn new(config: ListCheckConfig) -> Self {
        tracing::info!(max_glasses = config.max_glasses, "Water counter started");

        let screen = WaterScreen::new(&config);
        let environment = ListCheckEnvironment::new(config);
        let store = Store::new(WaterState::new(), WaterReducer::new(), environment.clone());
        Self {
            presenter: Presenter::new(store, screen),
            environment,
        }
    }

    /// The presenter currently showing the screen
    #[must_use]
    pub const fn presenter(&self) -> &WaterPresenter {
        &self.presenter
    }

    /// Render the current state
    pub async fn frame(&self) -> Node<WaterAction> {
        self.presenter.frame().await
    }

    /// Handle one command
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store rejected an event or the screen
    /// could not be rebuilt.
    pub async fn handle(&mut self, command: Command) -> Result<Reply, StoreError> {
        let delivered = match command {
            Command::Add => self.presenter.click_text(ADD_ONE).await?,
            Command::Clear => self.presenter.click_text(CLEAR).await?,
            Command::Close => self.presenter.click_description(CLOSE).await?,
            Command::Rotate => {
                self.rotate().await?;
                true
            },
            Command::Help => return Ok(Reply::Help),
            Command::Quit => return Ok(Reply::Quit),
        };

        Ok(if delivered { Reply::Updated } else { Reply::Ignored })
    }

    /// Simulate a configuration change
    ///
    /// The count and the banner dismissal both survive.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] if the state could not be saved or restored.
    pub async fn rotate(&mut self) -> Result<(), StoreError> {
        self.presenter
            .recreate(WaterReducer::new(), self.environment.clone())
            .await
    }

    /// Stop accepting events
    pub fn shutdown(&self) {
        self.presenter.store().shutdown();
    }
}
