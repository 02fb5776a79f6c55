//! Renders a [`Screen`] over a [`Store`] and routes UI events back into it.
//!
//! The presenter is the tiny "activity" of a screen: it owns the store for
//! the screen's lifetime, draws frames from the current state, and turns
//! clicks and text edits on the drawn frame into actions. Events are always
//! resolved against a freshly rendered frame, so a control that is disabled
//! (or gone) in the current state can never produce an action.

use crate::{Store, StoreError};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::watch;
use uiflow_core::action::Action;
use uiflow_core::reducer::Reducer;
use uiflow_core::view::{Node, Screen};

/// A screen bound to the store that owns its state
pub struct Presenter<Sc, R>
where
    Sc: Screen,
    R: Reducer<State = Sc::State, Action = Sc::Action>,
{
    store: Store<Sc::State, Sc::Action, R::Environment, R>,
    screen: Sc,
    changes: watch::Receiver<u64>,
}

impl<Sc, R> Presenter<Sc, R>
where
    Sc: Screen,
    Sc::State: Send + Sync + 'static,
    Sc::Action: Action + Clone + Send + 'static,
    R: Reducer<State = Sc::State, Action = Sc::Action> + Send + Sync + 'static,
    R::Environment: Send + Sync + 'static,
{
    /// Bind `screen` to `store`
    #[must_use]
    pub fn new(store: Store<Sc::State, Sc::Action, R::Environment, R>, screen: Sc) -> Self {
        let changes = store.subscribe();
        Self {
            store,
            screen,
            changes,
        }
    }

    /// The store backing this screen
    #[must_use]
    pub const fn store(&self) -> &Store<Sc::State, Sc::Action, R::Environment, R> {
        &self.store
    }

    /// Render the current state
    pub async fn frame(&self) -> Node<Sc::Action> {
        self.store.state(|state| self.screen.render(state)).await
    }

    /// Wait for the next state change and render it
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ChannelClosed`] if the store's change channel closed.
    pub async fn next_frame(&mut self) -> Result<Node<Sc::Action>, StoreError> {
        self.changes.changed().await.map_err(|_| StoreError::ChannelClosed)?;
        Ok(self.frame().await)
    }

    /// Click the button whose label is `label`
    ///
    /// Only buttons are matched, so a text showing the same words is skipped.
    /// Returns `Ok(false)` when no enabled button matches; nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store was shut down.
    pub async fn click_text(&self, label: &str) -> Result<bool, StoreError> {
        let action = self.frame().await.find_button(label).and_then(Node::click);
        self.dispatch(action, label).await
    }

    /// Click the first icon button described by `description`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store was shut down.
    pub async fn click_description(&self, description: &str) -> Result<bool, StoreError> {
        self.click_nth_description(description, 0).await
    }

    /// Click the `index`-th (0-based) icon button described by `description`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store was shut down.
    pub async fn click_nth_description(&self, description: &str, index: usize) -> Result<bool, StoreError> {
        let action = self
            .frame()
            .await
            .find_all_descriptions(description)
            .get(index)
            .and_then(|node| node.click());
        self.dispatch(action, description).await
    }

    /// Replace the contents of the text field labelled `label`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store was shut down.
    pub async fn input(&self, label: &str, text: &str) -> Result<bool, StoreError> {
        let action = self
            .frame()
            .await
            .find_description(label)
            .and_then(|field| field.input(text));
        self.dispatch(action, label).await
    }

    /// Tear the screen down and rebuild it from its saved state
    ///
    /// This is what a configuration change does to a screen: the saveable
    /// state is encoded, a new store is restored around a fresh `reducer` and
    /// `environment`, and the old store is shut down. State that is not
    /// saveable starts over from its default. On error the current store is
    /// left running.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] if the state fails to encode or decode.
    pub async fn recreate(&mut self, reducer: R, environment: R::Environment) -> Result<(), StoreError>
    where
        Sc::State: Serialize + DeserializeOwned,
    {
        let saved = self.store.save_state().await?;
        let store = Store::restore(&saved, reducer, environment)?;
        self.store.shutdown();
        self.changes = store.subscribe();
        self.store = store;
        Ok(())
    }

    async fn dispatch(&self, action: Option<Sc::Action>, target: &str) -> Result<bool, StoreError> {
        match action {
            Some(action) => {
                self.store.send(action).await?;
                Ok(true)
            },
            None => {
                tracing::debug!(control = target, "Event dropped: no enabled control matches");
                Ok(false)
            },
        }
    }
}
