//! Error taxonomy for a Hangman run
//!
//! Nothing here is retried. Every variant propagates to the top-level run and ends the game.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanError {
    /// Network failure or a non-200 response from the game server
    Transport(String),
    /// Response body did not match the expected shape
    Deserialization(String),
    /// The word source could not be found or read
    DictionaryLoad { path: PathBuf, reason: String },
    /// A guess was requested with no candidate words left
    EmptyCandidateSet,
    /// The server never reported the game as ended
    RoundLimitExceeded(usize),
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(reason) => write!(f, "Unable to send hangman request: {reason}"),
            Self::Deserialization(reason) => {
                write!(f, "Unable to parse hangman server response: {reason}")
            }
            Self::DictionaryLoad { path, reason } => {
                write!(f, "Failed to load dictionary from '{}': {reason}", path.display())
            }
            Self::EmptyCandidateSet => write!(f, "No candidate words remain to guess from"),
            Self::RoundLimitExceeded(rounds) => {
                write!(f, "Game did not end after {rounds} rounds")
            }
        }
    }
}

impl std::error::Error for HangmanError {}

impl From<serde_json::Error> for HangmanError {
    fn from(e: serde_json::Error) -> Self {
        Self::Deserialization(e.to_string())
    }
}

impl From<ureq::Error> for HangmanError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, _) => Self::Transport(format!("HTTP error code: {code}")),
            ureq::Error::Transport(t) => Self::Transport(t.to_string()),
        }
    }
}
