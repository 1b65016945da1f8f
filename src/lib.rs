// Library interface for hangman-player
// This allows integration tests to drive the game loop with a fake server

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod pattern;
pub mod strategy;
pub mod transport;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{CandidateSet, GuessOutcome, MatchMode, initialize, narrow};
pub use error::HangmanError;
pub use game_state::{GameReporter, GameSummary, PlayerConfig, play_game};
pub use pattern::RevealedPattern;
pub use strategy::{Guess, choose_guess, letter_frequencies};
pub use transport::{GameTransport, HttpTransport, ServerResponse};
pub use wordbank::{FileWordSource, StrWordSource, WordSource, load_wordbank_from_str};
