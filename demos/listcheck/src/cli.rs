//! Terminal commands for the listcheck binary.

use std::str::FromStr;
use thiserror::Error;

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  add      click \"Add one\"
  clear    click \"Clear water count\"
  close    close the wellness task banner
  rotate   simulate a configuration change
  help     show this help
  quit     exit";

/// A parsed terminal command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Drink a glass
    Add,
    /// Reset the count
    Clear,
    /// Dismiss the banner
    Close,
    /// Save, destroy and restore the screen
    Rotate,
    /// Show the command list
    Help,
    /// Exit the loop
    Quit,
}

/// Errors produced while parsing a command line
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line was blank
    #[error("empty command, type `help` for the command list")]
    Empty,

    /// The line is not a command
    #[error("unknown command `{0}`, type `help` for the command list")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim() {
            "" => Err(CommandError::Empty),
            "add" => Ok(Self::Add),
            "clear" => Ok(Self::Clear),
            "close" => Ok(Self::Close),
            "rotate" => Ok(Self::Rotate),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
