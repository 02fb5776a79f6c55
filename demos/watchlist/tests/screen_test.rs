//! End-to-end tests for the watchlist screen
//!
//! Events are delivered the way a user delivers them: by targeting controls
//! on the rendered frame.

#![allow(clippy::unwrap_used)] // Test code can use unwrap

use std::sync::Arc;
use uiflow_testing::{helpers::init_test_tracing, sequential_ids, view};
use watchlist::cli::Command;
use watchlist::view::{ADD_MOVIE, DRAFT_LABEL, EMPTY_WATCHLIST, TOGGLE_WATCHED, WATCHED};
use watchlist::{Reply, SeedMovie, Session, WatchlistConfig, WatchlistEnvironment};

fn session(config: &WatchlistConfig) -> Session {
    init_test_tracing();
    Session::new(config, WatchlistEnvironment::new(Arc::new(sequential_ids())))
}

async fn titles(session: &Session) -> Vec<(String, bool)> {
    session
        .presenter()
        .store()
        .state(|state| state.movies.iter().map(|m| (m.title.clone(), m.watched)).collect())
        .await
}

#[tokio::test]
async fn cold_start_shows_six_seed_movies() {
    let session = session(&WatchlistConfig::default());

    let frame = session.frame().await;

    assert_eq!(frame.find_all_descriptions(TOGGLE_WATCHED).len(), 6);
    view::assert_shows(&frame, "The Shawshank Redemption");
    view::assert_shows(&frame, "Dead Poets Society");
    view::assert_hidden(&frame, EMPTY_WATCHLIST);
    // Shawshank, Scarface, Dead Poets Society
    assert_eq!(frame.texts().iter().filter(|t| **t == WATCHED).count(), 3);
}

#[tokio::test]
async fn empty_watchlist_shows_placeholder() {
    let session = session(&WatchlistConfig::empty());

    let frame = session.frame().await;

    view::assert_shows(&frame, EMPTY_WATCHLIST);
    assert!(frame.find_all_descriptions(TOGGLE_WATCHED).is_empty());
}

#[tokio::test]
async fn toggle_fight_club() {
    let config = WatchlistConfig::empty().with_seed([SeedMovie::new("Fight Club", false)]);
    let mut session = session(&config);

    assert_eq!(session.handle(Command::Toggle(1)).await.unwrap(), Reply::Updated);

    assert_eq!(titles(&session).await, vec![("Fight Club".to_string(), true)]);
    let frame = session.frame().await;
    view::assert_shows(&frame, WATCHED);
    assert!(frame.to_string().contains("~~Fight Club~~"));
}

#[tokio::test]
async fn typed_title_is_added_at_the_end() {
    let mut session = session(&WatchlistConfig::default());

    session.handle(Command::Type("Heat".to_string())).await.unwrap();
    assert!(session.frame().await.to_string().contains("Add a movie: [Heat]"));

    session.handle(Command::Add(None)).await.unwrap();

    let movies = titles(&session).await;
    assert_eq!(movies.len(), 7);
    assert_eq!(movies.last(), Some(&("Heat".to_string(), false)));
    // The field is cleared after submitting
    assert!(session.frame().await.to_string().contains("Add a movie: []"));
}

#[tokio::test]
async fn empty_draft_adds_an_untitled_movie() {
    let session = session(&WatchlistConfig::empty());

    session.presenter().click_description(ADD_MOVIE).await.unwrap();

    assert_eq!(titles(&session).await, vec![(String::new(), false)]);
    view::assert_hidden(&session.frame().await, EMPTY_WATCHLIST);
}

#[tokio::test]
async fn duplicate_titles_toggle_independently() {
    let mut session = session(&WatchlistConfig::empty());
    session.handle(Command::Add(Some("Heat".to_string()))).await.unwrap();
    session.handle(Command::Add(Some("Heat".to_string()))).await.unwrap();

    session.handle(Command::Toggle(2)).await.unwrap();

    assert_eq!(
        titles(&session).await,
        vec![("Heat".to_string(), false), ("Heat".to_string(), true)]
    );
}

#[tokio::test]
async fn toggle_past_the_last_row_is_ignored() {
    let mut session = session(&WatchlistConfig::default());
    let before = titles(&session).await;

    assert_eq!(session.handle(Command::Toggle(7)).await.unwrap(), Reply::Ignored);
    assert_eq!(session.handle(Command::Toggle(0)).await.unwrap(), Reply::Ignored);

    assert_eq!(titles(&session).await, before);
    assert_eq!(session.presenter().store().revision(), 0);
}

#[tokio::test]
async fn rotate_keeps_movies_and_drops_draft() {
    let mut session = session(&WatchlistConfig::default());
    session.handle(Command::Add(Some("Heat".to_string()))).await.unwrap();
    session.handle(Command::Toggle(2)).await.unwrap();
    session.handle(Command::Type("half-typed".to_string())).await.unwrap();
    let before = titles(&session).await;
    let old_store = session.presenter().store().clone();

    assert_eq!(session.handle(Command::Rotate).await.unwrap(), Reply::Updated);

    assert_eq!(titles(&session).await, before);
    assert!(old_store.is_shut_down());
    let frame = session.frame().await;
    assert!(frame.to_string().contains("Add a movie: []"));
    assert!(frame.find_description(DRAFT_LABEL).is_some());
}

#[tokio::test]
async fn ids_stay_stable_across_rotate() {
    let mut session = session(&WatchlistConfig::empty().with_seed([
        SeedMovie::new("Alien", false),
        SeedMovie::new("Aliens", false),
    ]));

    session.handle(Command::Rotate).await.unwrap();
    session.handle(Command::Toggle(2)).await.unwrap();

    assert_eq!(
        titles(&session).await,
        vec![("Alien".to_string(), false), ("Aliens".to_string(), true)]
    );
}

#[tokio::test]
async fn help_and_quit_do_not_touch_the_store() {
    let mut session = session(&WatchlistConfig::default());

    assert_eq!(session.handle(Command::Help).await.unwrap(), Reply::Help);
    assert_eq!(session.handle(Command::Quit).await.unwrap(), Reply::Quit);

    assert_eq!(session.presenter().store().revision(), 0);
}

#[tokio::test]
async fn shut_down_session_rejects_events() {
    let mut session = session(&WatchlistConfig::default());
    session.shutdown();

    assert!(session.handle(Command::Toggle(1)).await.is_err());
}
