//! Movie watchlist screen.
//!
//! A list of movies, each with a watched toggle, and a text field to add
//! more. Built from two components scoped into one screen:
//!
//! - The watchlist ([`WatchlistReducer`] + [`movie_list`]) owns the movies
//! - The input row ([`DraftReducer`] + [`add_movie_row`]) owns the draft text
//!   and hands submitted titles to the watchlist
//!
//! Movies survive a configuration change ([`Session::rotate`]); the draft
//! does not.
//!
//! # Quick Start
//!
//! ```no_run
//! use watchlist::{Session, WatchlistConfig, WatchlistEnvironment};
//! use watchlist::cli::Command;
//!
//! # async fn example() -> Result<(), uiflow_runtime::StoreError> {
//! let mut session = Session::new(&WatchlistConfig::default(), WatchlistEnvironment::default());
//!
//! session.handle(Command::Add(Some("Heat".to_string()))).await?;
//! session.handle(Command::Toggle(1)).await?;
//!
//! println!("{}", session.frame().await);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod reducer;
pub mod session;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{watchlist_reducer, DraftReducer, WatchlistEnvironment, WatchlistReducer, WatchlistScreenReducer};
pub use session::{Reply, Session, WatchlistPresenter, WatchlistStore};
pub use types::{
    Draft, DraftAction, Movie, MovieAction, MovieId, MovieList, SeedMovie, WatchlistAction, WatchlistConfig,
    WatchlistState,
};
pub use view::{add_movie_row, movie_list, WatchlistScreen};
