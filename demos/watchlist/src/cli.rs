//! Terminal commands for the watchlist binary.

use std::str::FromStr;
use thiserror::Error;

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  type <text>   replace the contents of the \"Add a movie\" field
  add [title]   click \"Add movie\" (typing <title> first, if given)
  toggle <n>    toggle the watched status of row <n> (1-based)
  rotate        simulate a configuration change
  help          show this help
  quit          exit";

/// A parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the draft text
    Type(String),
    /// Submit the draft, optionally typing a title first
    Add(Option<String>),
    /// Toggle the movie on a 1-based row
    Toggle(usize),
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

    /// The first word is not a command
    #[error("unknown command `{0}`, type `help` for the command list")]
    Unknown(String),

    /// A required argument was not given
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// What was expected
        argument: &'static str,
    },

    /// A row number is not a positive integer
    #[error("`{0}` is not a row number, rows start at 1")]
    InvalidRow(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word {
            "" => Err(CommandError::Empty),
            "type" => Ok(Self::Type(rest.to_string())),
            "add" if rest.is_empty() => Ok(Self::Add(None)),
            "add" => Ok(Self::Add(Some(rest.to_string()))),
            "toggle" if rest.is_empty() => Err(CommandError::MissingArgument {
                command: "toggle",
                argument: "a row number",
            }),
            "toggle" => match rest.parse::<usize>() {
                Ok(row) if row > 0 => Ok(Self::Toggle(row)),
                _ => Err(CommandError::InvalidRow(rest.to_string())),
            },
            "rotate" => Ok(Self::Rotate),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("type Heat".parse(), Ok(Command::Type("Heat".to_string())));
        assert_eq!("type".parse(), Ok(Command::Type(String::new())));
        assert_eq!("add".parse(), Ok(Command::Add(None)));
        assert_eq!(
            "add  The Thing ".parse(),
            Ok(Command::Add(Some("The Thing".to_string())))
        );
        assert_eq!("toggle 2".parse(), Ok(Command::Toggle(2)));
        assert_eq!(" rotate".parse(), Ok(Command::Rotate));
        assert_eq!("help".parse(), Ok(Command::Help));
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_rows() {
        assert_eq!("toggle 0".parse::<Command>(), Err(CommandError::InvalidRow("0".to_string())));
        assert_eq!(
            "toggle two".parse::<Command>(),
            Err(CommandError::InvalidRow("two".to_string()))
        );
        assert!(matches!(
            "toggle".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "toggle", .. })
        ));
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert_eq!("watch".parse::<Command>(), Err(CommandError::Unknown("watch".to_string())));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
    }
}
