//! Water counter with a dismissible wellness task.
//!
//! The screen counts glasses of water up to a limit and, once the first glass
//! is in, shows a wellness task banner that can be closed. Closing the banner
//! lasts until the count is cleared.
//!
//! All of the state survives a configuration change ([`Session::rotate`]).
//!
//! # Quick Start
//!
//! ```no_run
//! use listcheck::{ListCheckConfig, Session};
//! use listcheck::cli::Command;
//!
//! # async fn example() -> Result<(), uiflow_runtime::StoreError> {
//! let mut session = Session::new(ListCheckConfig::default());
//!
//! session.handle(Command::Add).await?;
//! session.handle(Command::Close).await?;
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
pub use reducer::{ListCheckEnvironment, WaterReducer};
pub use session::{Reply, Session, WaterPresenter, WaterStore};
pub use types::{ListCheckConfig, WaterAction, WaterState};
pub use view::WaterScreen;
