//! Reducer logic for the watchlist screen.
//!
//! Two components share the screen: the watchlist itself and the add-movie
//! input row. Each has its own reducer over its own slice of state, and
//! [`watchlist_reducer`] scopes both into the screen.

use crate::types::{Draft, DraftAction, Movie, MovieAction, MovieId, MovieList, WatchlistAction, WatchlistState};
use std::sync::Arc;
use uiflow_core::{
    composition::{combine_reducers, scope, CombinedReducer},
    effect::Effect,
    environment::{IdGenerator, RandomIds},
    reducer::Reducer,
    smallvec, SmallVec,
};

/// Environment dependencies for the watchlist reducers
#[derive(Clone)]
pub struct WatchlistEnvironment {
    /// Source of ids for new movies
    pub ids: Arc<dyn IdGenerator>,
}

impl WatchlistEnvironment {
    /// Creates a new `WatchlistEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for WatchlistEnvironment {
    fn default() -> Self {
        Self::new(Arc::new(RandomIds))
    }
}

/// State holder for the watchlist
///
/// Adds never validate the title, and toggles addressed to an unknown id
/// leave the list as it was.
#[derive(Clone, Debug, Default)]
pub struct WatchlistReducer;

impl WatchlistReducer {
    /// Creates a new `WatchlistReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for WatchlistReducer {
    type State = MovieList;
    type Action = MovieAction;
    type Environment = WatchlistEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            MovieAction::AddMovie { title } => {
                let id = MovieId::from_uuid(env.ids.next_id());
                tracing::debug!(%id, position = state.len(), "Movie added");
                state.push(Movie::new(id, title));
            },
            MovieAction::ToggleWatched { id } => {
                if !state.toggle(id) {
                    tracing::debug!(%id, "Toggle ignored: no such movie");
                }
            },
        }

        SmallVec::new()
    }
}

/// Reducer for the add-movie input row
#[derive(Clone, Debug, Default)]
pub struct DraftReducer;

impl DraftReducer {
    /// Creates a new `DraftReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for DraftReducer {
    type State = Draft;
    type Action = DraftAction;
    type Environment = WatchlistEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            DraftAction::Changed(text) => {
                state.text = text;
                SmallVec::new()
            },
            DraftAction::Submit => {
                let title = std::mem::take(&mut state.text);
                smallvec![Effect::Send(DraftAction::Submitted(title))]
            },
            // Routed to the watchlist by the screen
            DraftAction::Submitted(_) => SmallVec::new(),
        }
    }
}

/// The combined reducer driving [`WatchlistState`]
pub type WatchlistScreenReducer = CombinedReducer<WatchlistState, WatchlistAction, WatchlistEnvironment>;

/// Builds the screen reducer
///
/// A submitted draft is delivered to the watchlist as `AddMovie`.
#[must_use]
pub fn watchlist_reducer() -> WatchlistScreenReducer {
    combine_reducers(vec![
        Box::new(scope(
            WatchlistReducer::new(),
            |state: &mut WatchlistState| &mut state.movies,
            |action| match action {
                WatchlistAction::Movies(action) => Some(action),
                WatchlistAction::Draft(_) => None,
            },
            WatchlistAction::Movies,
        )),
        Box::new(scope(
            DraftReducer::new(),
            |state: &mut WatchlistState| &mut state.draft,
            |action| match action {
                WatchlistAction::Draft(action) => Some(action),
                WatchlistAction::Movies(_) => None,
            },
            |action| match action {
                DraftAction::Submitted(title) => WatchlistAction::Movies(MovieAction::AddMovie { title }),
                other => WatchlistAction::Draft(other),
            },
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiflow_testing::{assertions, sequential_ids, ReducerTest, SequentialIds};

    fn env() -> WatchlistEnvironment {
        WatchlistEnvironment::new(Arc::new(sequential_ids()))
    }

    fn id(n: u64) -> MovieId {
        MovieId::from_uuid(SequentialIds::id(n))
    }

    fn fight_club() -> MovieList {
        MovieList::from(vec![Movie::new(id(100), "Fight Club")])
    }

    #[test]
    fn add_movie_appends_unwatched() {
        ReducerTest::new(WatchlistReducer::new())
            .with_env(env())
            .given_state(fight_club())
            .when_action(MovieAction::AddMovie {
                title: "Heat".to_string(),
            })
            .then_state(|movies| {
                assert_eq!(movies.len(), 2);
                assert_eq!(movies.at(1), Some(&Movie::new(id(1), "Heat")));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_movie_accepts_empty_and_duplicate_titles() {
        ReducerTest::new(WatchlistReducer::new())
            .with_env(env())
            .given_state(fight_club())
            .when_actions([
                MovieAction::AddMovie { title: String::new() },
                MovieAction::AddMovie {
                    title: "Fight Club".to_string(),
                },
            ])
            .then_state(|movies| {
                assert_eq!(movies.len(), 3);
                assert_eq!(movies.at(1).map(|m| m.title.as_str()), Some(""));
                assert_eq!(movies.at(2).map(|m| m.title.as_str()), Some("Fight Club"));
                assert_ne!(movies.at(0).map(|m| m.id), movies.at(2).map(|m| m.id));
            })
            .run();
    }

    #[test]
    fn toggle_flips_fight_club() {
        ReducerTest::new(WatchlistReducer::new())
            .with_env(env())
            .given_state(fight_club())
            .when_action(MovieAction::ToggleWatched { id: id(100) })
            .then_state(|movies| {
                assert_eq!(movies.len(), 1);
                assert_eq!(movies.at(0).map(|m| m.watched), Some(true));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn toggle_twice_restores() {
        ReducerTest::new(WatchlistReducer::new())
            .with_env(env())
            .given_state(fight_club())
            .when_actions([
                MovieAction::ToggleWatched { id: id(100) },
                MovieAction::ToggleWatched { id: id(100) },
            ])
            .then_state(|movies| assert_eq!(*movies, fight_club()))
            .run();
    }

    #[test]
    fn toggle_only_touches_the_matching_duplicate() {
        let twins = MovieList::from(vec![Movie::new(id(100), "Heat"), Movie::new(id(101), "Heat")]);

        ReducerTest::new(WatchlistReducer::new())
            .with_env(env())
            .given_state(twins)
            .when_action(MovieAction::ToggleWatched { id: id(101) })
            .then_state(|movies| {
                assert_eq!(movies.get(id(100)).map(|m| m.watched), Some(false));
                assert_eq!(movies.get(id(101)).map(|m| m.watched), Some(true));
            })
            .run();
    }

    #[test]
    fn toggle_on_empty_list_is_noop() {
        ReducerTest::new(WatchlistReducer::new())
            .with_env(env())
            .given_state(MovieList::new())
            .when_action(MovieAction::ToggleWatched { id: id(1) })
            .then_state(|movies| assert!(movies.is_empty()))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn edit_replaces_draft() {
        ReducerTest::new(DraftReducer::new())
            .with_env(env())
            .given_state(Draft::default())
            .when_actions([
                DraftAction::Changed("He".to_string()),
                DraftAction::Changed("Heat".to_string()),
            ])
            .then_state(|draft| assert_eq!(draft.text, "Heat"))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn submit_takes_the_draft() {
        ReducerTest::new(DraftReducer::new())
            .with_env(env())
            .given_state(Draft {
                text: "Heat".to_string(),
            })
            .when_action(DraftAction::Submit)
            .then_state(|draft| assert!(draft.text.is_empty()))
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_sends(effects, &DraftAction::Submitted("Heat".to_string()));
            })
            .run();
    }

    #[test]
    fn screen_routes_submission_to_the_watchlist() {
        ReducerTest::new(watchlist_reducer())
            .with_env(env())
            .given_state(WatchlistState::new(fight_club()))
            .when_action(WatchlistAction::Draft(DraftAction::Submit))
            .then_state(|state| assert_eq!(state.movies.len(), 1))
            .then_effects(|effects| {
                assertions::assert_sends(
                    effects,
                    &WatchlistAction::Movies(MovieAction::AddMovie { title: String::new() }),
                );
            })
            .run();
    }

    #[test]
    fn screen_scopes_movie_actions() {
        ReducerTest::new(watchlist_reducer())
            .with_env(env())
            .given_state(WatchlistState::new(fight_club()))
            .when_action(WatchlistAction::Movies(MovieAction::AddMovie {
                title: "Heat".to_string(),
            }))
            .then_state(|state| {
                assert_eq!(state.movies.len(), 2);
                assert!(state.draft.text.is_empty());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
