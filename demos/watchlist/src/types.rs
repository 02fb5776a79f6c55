//! Domain types for the watchlist screen.
//!
//! A watchlist is an ordered sequence of movies. Movies are appended, their
//! watched flag is toggled, and nothing is ever removed. Display order is
//! insertion order.

use serde::{Deserialize, Serialize};
use uiflow_core::environment::IdGenerator;
use uiflow_macros::Action;
use uuid::Uuid;

/// Unique identifier for a movie on the watchlist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(Uuid);

impl MovieId {
    /// Creates a `MovieId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single movie on the watchlist
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Stable identifier, assigned when the movie is added
    pub id: MovieId,
    /// Title as typed; may be empty
    pub title: String,
    /// Whether the movie has been watched
    pub watched: bool,
}

impl Movie {
    /// Creates an unwatched movie
    #[must_use]
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            watched: false,
        }
    }

    /// Flips the watched flag
    pub const fn toggle_watched(&mut self) {
        self.watched = !self.watched;
    }
}

/// The sequence of movies, in display order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieList(Vec<Movie>);

impl MovieList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds the cold-start list from `config`, drawing ids from `ids`
    #[must_use]
    pub fn seeded(config: &WatchlistConfig, ids: &dyn IdGenerator) -> Self {
        Self(
            config
                .seed
                .iter()
                .map(|seed| Movie {
                    id: MovieId::from_uuid(ids.next_id()),
                    title: seed.title.clone(),
                    watched: seed.watched,
                })
                .collect(),
        )
    }

    /// Number of movies
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list holds no movies
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the movies in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.0.iter()
    }

    /// The movies as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Movie] {
        &self.0
    }

    /// Returns a movie by ID
    #[must_use]
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.0.iter().find(|movie| movie.id == id)
    }

    /// Returns the movie shown on the `index`-th row (0-based)
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Movie> {
        self.0.get(index)
    }

    /// Appends a movie at the end
    pub fn push(&mut self, movie: Movie) {
        self.0.push(movie);
    }

    /// Flips the watched flag of the movie with `id`
    ///
    /// Returns false if no movie has that id.
    pub fn toggle(&mut self, id: MovieId) -> bool {
        match self.0.iter_mut().find(|movie| movie.id == id) {
            Some(movie) => {
                movie.toggle_watched();
                true
            },
            None => false,
        }
    }
}

impl From<Vec<Movie>> for MovieList {
    fn from(movies: Vec<Movie>) -> Self {
        Self(movies)
    }
}

impl<'a> IntoIterator for &'a MovieList {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Text being typed into the "Add a movie" field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    /// Current field contents
    pub text: String,
}

/// State of the whole watchlist screen
///
/// Only the movies are saved across configuration changes; the draft
/// starts empty again after a restore.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistState {
    /// The watchlist
    pub movies: MovieList,
    /// The add-movie text field
    #[serde(skip)]
    pub draft: Draft,
}

impl WatchlistState {
    /// Creates a screen state showing `movies` with an empty draft
    #[must_use]
    pub fn new(movies: MovieList) -> Self {
        Self {
            movies,
            draft: Draft::default(),
        }
    }
}

/// A movie the watchlist starts with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedMovie {
    /// Title
    pub title: String,
    /// Initial watched flag
    pub watched: bool,
}

impl SeedMovie {
    /// Creates a seed entry
    #[must_use]
    pub fn new(title: impl Into<String>, watched: bool) -> Self {
        Self {
            title: title.into(),
            watched,
        }
    }
}

/// Configuration for the watchlist screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchlistConfig {
    /// Movies present on cold start, in display order
    pub seed: Vec<SeedMovie>,
}

impl WatchlistConfig {
    /// A configuration that starts with an empty watchlist
    #[must_use]
    pub const fn empty() -> Self {
        Self { seed: Vec::new() }
    }

    /// Replace the cold-start movies
    #[must_use]
    pub fn with_seed(mut self, seed: impl IntoIterator<Item = SeedMovie>) -> Self {
        self.seed = seed.into_iter().collect();
        self
    }
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            seed: vec![
                SeedMovie::new("The Shawshank Redemption", true),
                SeedMovie::new("Fight Club", false),
                SeedMovie::new("The Dark Knight", false),
                SeedMovie::new("Scarface", true),
                SeedMovie::new("American Psycho", false),
                SeedMovie::new("Dead Poets Society", true),
            ],
        }
    }
}

/// Actions handled by the watchlist state holder
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum MovieAction {
    /// Append an unwatched movie
    AddMovie {
        /// Title of the new movie
        title: String,
    },

    /// Flip the watched flag of one movie
    ToggleWatched {
        /// Movie to toggle
        id: MovieId,
    },
}

/// Actions handled by the add-movie input row
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum DraftAction {
    /// The field contents changed
    #[input]
    Changed(String),

    /// The "Add movie" button was clicked
    Submit,

    /// The draft was taken; carries the submitted title
    Submitted(String),
}

/// Actions of the whole watchlist screen
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum WatchlistAction {
    /// Addressed to the watchlist
    #[scope]
    Movies(MovieAction),

    /// Addressed to the input row
    #[scope]
    Draft(DraftAction),
}

impl From<MovieAction> for WatchlistAction {
    fn from(action: MovieAction) -> Self {
        Self::Movies(action)
    }
}

impl From<DraftAction> for WatchlistAction {
    fn from(action: DraftAction) -> Self {
        Self::Draft(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiflow_core::Action as _;
    use uiflow_testing::{sequential_ids, SequentialIds};

    fn id(n: u64) -> MovieId {
        MovieId::from_uuid(SequentialIds::id(n))
    }

    #[test]
    fn movie_new_is_unwatched() {
        let movie = Movie::new(id(1), "Heat");

        assert_eq!(movie.title, "Heat");
        assert!(!movie.watched);
    }

    #[test]
    fn default_seed_matches_cold_start() {
        let list = MovieList::seeded(&WatchlistConfig::default(), &sequential_ids());

        let titles: Vec<_> = list.iter().map(|m| (m.title.as_str(), m.watched)).collect();
        assert_eq!(
            titles,
            vec![
                ("The Shawshank Redemption", true),
                ("Fight Club", false),
                ("The Dark Knight", false),
                ("Scarface", true),
                ("American Psycho", false),
                ("Dead Poets Society", true),
            ]
        );
        assert_eq!(list.at(0).map(|m| m.id), Some(id(1)));
        assert_eq!(list.at(5).map(|m| m.id), Some(id(6)));
    }

    #[test]
    fn toggle_reports_missing_id() {
        let mut list = MovieList::from(vec![Movie::new(id(1), "Heat")]);

        assert!(list.toggle(id(1)));
        assert!(!list.toggle(id(2)));
        assert_eq!(list.get(id(1)).map(|m| m.watched), Some(true));
    }

    #[test]
    fn screen_action_names_delegate() {
        let action = WatchlistAction::from(DraftAction::Changed("H".to_string()));
        assert_eq!(action.name(), "Changed");
        assert!(action.is_input());

        let action = WatchlistAction::from(MovieAction::ToggleWatched { id: id(1) });
        assert_eq!(action.name(), "ToggleWatched");
        assert!(!action.is_input());
    }
}
