//! Rendering for the watchlist screen.

use crate::types::{Draft, DraftAction, MovieAction, MovieList, WatchlistAction, WatchlistState};
use uiflow_core::view::{Decoration, Icon, Node, Screen};

/// Label of the add-movie text field
pub const DRAFT_LABEL: &str = "Add a movie";

/// Description of the add-movie button
pub const ADD_MOVIE: &str = "Add movie";

/// Description of each row's toggle button
pub const TOGGLE_WATCHED: &str = "Toggle watched status";

/// Label shown next to watched movies
pub const WATCHED: &str = "Watched";

/// Text shown in place of an empty list
pub const EMPTY_WATCHLIST: &str = "Your watchlist is empty";

const WATCHED_ALPHA: f32 = 1.0;
const UNWATCHED_ALPHA: f32 = 0.3;

/// Render the watchlist, one row per movie in display order
#[must_use]
pub fn movie_list(movies: &MovieList) -> Node<MovieAction> {
    if movies.is_empty() {
        return Node::text(EMPTY_WATCHLIST);
    }

    Node::column(
        movies
            .iter()
            .map(|movie| {
                let (alpha, decoration) = if movie.watched {
                    (WATCHED_ALPHA, Decoration::LineThrough)
                } else {
                    (UNWATCHED_ALPHA, Decoration::None)
                };

                let mut row = vec![
                    Node::icon_button(
                        Icon::Visibility,
                        TOGGLE_WATCHED,
                        alpha,
                        MovieAction::ToggleWatched { id: movie.id },
                    ),
                    Node::decorated_text(movie.title.clone(), decoration),
                ];
                if movie.watched {
                    row.push(Node::text(WATCHED));
                }
                Node::row(row)
            })
            .collect(),
    )
}

/// Render the text field and button used to add a movie
#[must_use]
pub fn add_movie_row(draft: &Draft) -> Node<DraftAction> {
    Node::row(vec![
        Node::text_field(DRAFT_LABEL, draft.text.clone(), DraftAction::Changed),
        Node::icon_button(Icon::Add, ADD_MOVIE, 1.0, DraftAction::Submit),
    ])
}

/// The watchlist screen: the input row above the list
#[derive(Clone, Copy, Debug, Default)]
pub struct WatchlistScreen;

impl Screen for WatchlistScreen {
    type State = WatchlistState;
    type Action = WatchlistAction;

    fn render(&self, state: &WatchlistState) -> Node<WatchlistAction> {
        Node::column(vec![
            add_movie_row(&state.draft).map(WatchlistAction::Draft),
            movie_list(&state.movies).map(WatchlistAction::Movies),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Movie, MovieId};
    use uiflow_testing::{view, SequentialIds};

    fn id(n: u64) -> MovieId {
        MovieId::from_uuid(SequentialIds::id(n))
    }

    fn watched(n: u64, title: &str) -> Movie {
        Movie {
            watched: true,
            ..Movie::new(id(n), title)
        }
    }

    #[test]
    fn empty_list_renders_placeholder_only() {
        let frame = movie_list(&MovieList::new());

        view::assert_shows(&frame, EMPTY_WATCHLIST);
        assert!(frame.find_all_descriptions(TOGGLE_WATCHED).is_empty());
        assert_eq!(frame.texts(), vec![EMPTY_WATCHLIST]);
    }

    #[test]
    fn rows_follow_display_order() {
        let movies = MovieList::from(vec![Movie::new(id(1), "Fight Club"), watched(2, "Scarface")]);

        let frame = movie_list(&movies);

        assert_eq!(frame.children().len(), 2);
        assert_eq!(frame.texts(), vec!["Fight Club", "Scarface", WATCHED]);
        view::assert_hidden(&frame, EMPTY_WATCHLIST);
    }

    #[test]
    fn watched_row_is_struck_and_opaque() {
        let movies = MovieList::from(vec![watched(1, "Scarface")]);

        let frame = movie_list(&movies);

        assert!(matches!(
            frame.find_text("Scarface"),
            Some(Node::Text {
                decoration: Decoration::LineThrough,
                ..
            })
        ));
        assert!(matches!(
            frame.find_description(TOGGLE_WATCHED),
            Some(Node::IconButton { alpha, .. }) if (*alpha - WATCHED_ALPHA).abs() < f32::EPSILON
        ));
        assert_eq!(frame.to_string(), "(●)  ~~Scarface~~  Watched");
    }

    #[test]
    fn unwatched_row_is_plain_and_dimmed() {
        let movies = MovieList::from(vec![Movie::new(id(1), "Fight Club")]);

        let frame = movie_list(&movies);

        view::assert_hidden(&frame, WATCHED);
        assert!(matches!(
            frame.find_description(TOGGLE_WATCHED),
            Some(Node::IconButton { alpha, .. }) if (*alpha - UNWATCHED_ALPHA).abs() < f32::EPSILON
        ));
        assert_eq!(frame.to_string(), "(○)  Fight Club");
    }

    #[test]
    fn toggle_button_addresses_its_own_movie() {
        let movies = MovieList::from(vec![Movie::new(id(1), "Heat"), Movie::new(id(2), "Heat")]);

        let frame = movie_list(&movies);
        let buttons = frame.find_all_descriptions(TOGGLE_WATCHED);

        assert_eq!(buttons[1].click(), Some(MovieAction::ToggleWatched { id: id(2) }));
    }

    #[test]
    fn input_row_edits_and_submits() {
        let frame = add_movie_row(&Draft {
            text: "He".to_string(),
        });

        assert_eq!(frame.to_string(), "Add a movie: [He]  (+)");
        assert_eq!(
            frame.find_description(DRAFT_LABEL).and_then(|f| f.input("Heat")),
            Some(DraftAction::Changed("Heat".to_string()))
        );
        assert_eq!(
            frame.find_description(ADD_MOVIE).and_then(Node::click),
            Some(DraftAction::Submit)
        );
    }

    #[test]
    fn screen_puts_input_row_above_list() {
        let state = WatchlistState::new(MovieList::from(vec![Movie::new(id(1), "Heat")]));

        let frame = WatchlistScreen.render(&state);

        assert_eq!(frame.to_string(), "Add a movie: []  (+)\n(○)  Heat");
        assert_eq!(
            frame.find_description(TOGGLE_WATCHED).and_then(Node::click),
            Some(WatchlistAction::Movies(MovieAction::ToggleWatched { id: id(1) }))
        );
    }
}
