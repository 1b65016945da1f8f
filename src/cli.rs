use crate::dictionary::MatchMode;
use crate::game_state::{ALPHABET_SIZE, GameReporter, GameSummary, PlayerConfig};
use crate::pattern::RevealedPattern;
use crate::strategy::Guess;
use crate::transport::{DEFAULT_SERVER_URL, ServerResponse};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Hangman player CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'i', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Base URL of the Hangman server
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// How a correct letter narrows the candidate words
    #[arg(long, value_enum, default_value_t = MatchModeArg::Substring)]
    pub match_mode: MatchModeArg,

    /// Give up if the server has not ended the game after this many guesses
    #[arg(long, default_value_t = ALPHABET_SIZE + 1)]
    pub max_rounds: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchModeArg {
    /// Keep words containing the letter anywhere
    Substring,
    /// Keep words matching every revealed position
    Positional,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Substring => MatchMode::Substring,
            MatchModeArg::Positional => MatchMode::Positional,
        }
    }
}

impl Cli {
    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            match_mode: self.match_mode.into(),
            max_rounds: self.max_rounds,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI output functions

pub fn display_game_started(pattern: &RevealedPattern, candidate_count: usize) {
    println!("Game started successfully");
    println!("Hidden word: {pattern} ({} letters)", pattern.len());
    println!("Loaded {candidate_count} candidate words.");
}

pub fn display_guess(round: usize, guess: &Guess, candidate_count: usize) {
    let kind = if guess.is_word() { "word" } else { "letter" };
    println!("Guess {round}: {guess} [{kind}, {candidate_count} candidates]");
}

pub fn display_guess_result(response: &ServerResponse) {
    let verdict = if response.correct { "correct" } else { "wrong" };
    println!(
        "  {verdict}: {} (failed attempts: {})",
        response.hangman, response.failed_attempts
    );
}

pub fn display_game_ended(summary: &GameSummary) {
    println!("Game ended...");
    println!("{}", outcome_message(summary));
    println!(
        "Played for {:.1}s",
        summary.elapsed.num_milliseconds() as f64 / 1000.0
    );
}

fn outcome_message(summary: &GameSummary) -> String {
    if summary.won {
        format!("You won the game after {} attempts", summary.guesses)
    } else {
        format!("You lost the game after {} attempts", summary.failed_attempts)
    }
}

/// CLI implementation of the GameReporter trait
/// Prints game progress to stdout
#[derive(Debug, Default)]
pub struct CliReporter;

impl GameReporter for CliReporter {
    fn game_started(&mut self, pattern: &RevealedPattern, candidate_count: usize) {
        display_game_started(pattern, candidate_count);
    }

    fn guess_made(&mut self, round: usize, guess: &Guess, candidate_count: usize) {
        display_guess(round, guess, candidate_count);
    }

    fn guess_result(&mut self, response: &ServerResponse) {
        display_guess_result(response);
    }

    fn game_ended(&mut self, summary: &GameSummary) {
        display_game_ended(summary);
    }
}
