//! An interactive watchlist session: one presenter driven by commands.

use crate::cli::Command;
use crate::reducer::{watchlist_reducer, WatchlistEnvironment, WatchlistScreenReducer};
use crate::types::{MovieList, WatchlistAction, WatchlistConfig, WatchlistState};
use crate::view::{WatchlistScreen, ADD_MOVIE, DRAFT_LABEL, TOGGLE_WATCHED};
use uiflow_core::view::Node;
use uiflow_runtime::{Presenter, Store, StoreError};

/// Store backing the watchlist screen
pub type WatchlistStore = Store<WatchlistState, WatchlistAction, WatchlistEnvironment, WatchlistScreenReducer>;

/// Watchlist screen bound to its store
pub type WatchlistPresenter = Presenter<WatchlistScreen, WatchlistScreenReducer>;

/// What a handled command asks of the terminal loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    /// An event was delivered; redraw
    Updated,
    /// The command matched no control on screen
    Ignored,
    /// Print the command list
    Help,
    /// Leave the loop
    Quit,
}

/// A running watchlist screen
pub struct Session {
    presenter: WatchlistPresenter,
    environment: WatchlistEnvironment,
}

impl Session {
    /// Cold-start the screen with the movies from `config`
    #[must_use]
    pub fn new(config: &WatchlistConfig, environment: WatchlistEnvironment) -> Self {
        let movies = MovieList::seeded(config, environment.ids.as_ref());
        tracing::info!(movies = movies.len(), "Watchlist started");

        let store = Store::new(WatchlistState::new(movies), watchlist_reducer(), environment.clone());
        Self {
            presenter: Presenter::new(store, WatchlistScreen),
            environment,
        }
    }

    /// The presenter currently showing the screen
    #[must_use]
    pub const fn presenter(&self) -> &WatchlistPresenter {
        &self.presenter
    }

    /// Render the current state
    pub async fn frame(&self) -> Node<WatchlistAction> {
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
            Command::Type(text) => self.presenter.input(DRAFT_LABEL, &text).await?,
            Command::Add(title) => {
                if let Some(title) = title {
                    self.presenter.input(DRAFT_LABEL, &title).await?;
                }
                self.presenter.click_description(ADD_MOVIE).await?
            },
            Command::Toggle(row) => match row.checked_sub(1) {
                Some(index) => self.presenter.click_nth_description(TOGGLE_WATCHED, index).await?,
                None => false,
            },
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
    /// The movies survive; the draft is lost.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] if the state could not be saved or restored.
    pub async fn rotate(&mut self) -> Result<(), StoreError> {
        self.presenter
            .recreate(watchlist_reducer(), self.environment.clone())
            .await
    }

    /// Stop accepting events
    pub fn shutdown(&self) {
        self.presenter.store().shutdown();
    }
}
