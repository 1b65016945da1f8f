use crate::dictionary::{CandidateSet, GuessOutcome, MatchMode, initialize, narrow};
use crate::error::HangmanError;
use crate::pattern::RevealedPattern;
use crate::strategy::{Guess, choose_guess};
use crate::transport::{GameTransport, ServerResponse};
use crate::wordbank::WordSource;
use crate::{debug_log, info_log};
use chrono::{DateTime, Local, TimeDelta};

pub const ALPHABET_SIZE: usize = 26;

/// Knobs for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    pub match_mode: MatchMode,
    /// Hard cap on guesses, in case the server never reports the game as ended.
    pub max_rounds: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            max_rounds: ALPHABET_SIZE + 1,
        }
    }
}

/// How a finished game went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub won: bool,
    /// Guesses submitted, letters and words alike.
    pub guesses: usize,
    pub failed_attempts: u32,
    pub final_pattern: String,
    pub started_at: DateTime<Local>,
    pub elapsed: TimeDelta,
}

/// Progress sink for the game loop
/// Implemented by the stdout reporter in `cli` and by recorders in tests
pub trait GameReporter {
    fn game_started(&mut self, pattern: &RevealedPattern, candidate_count: usize);
    fn guess_made(&mut self, round: usize, guess: &Guess, candidate_count: usize);
    fn guess_result(&mut self, response: &ServerResponse);
    fn game_ended(&mut self, summary: &GameSummary);
}

/// Play one game to the end.
///
/// # Errors
///
/// Fails on any transport or dictionary error, if the candidate set runs dry,
/// or if the server has not ended the game after `config.max_rounds` guesses.
pub fn play_game<T, W, R>(
    transport: &mut T,
    word_source: &W,
    config: &PlayerConfig,
    reporter: &mut R,
) -> Result<GameSummary, HangmanError>
where
    T: GameTransport + ?Sized,
    W: WordSource + ?Sized,
    R: GameReporter + ?Sized,
{
    let words = word_source.words()?;
    let started_at = Local::now();
    let mut response = transport.start_new_game()?;
    let mut pattern = RevealedPattern::new(&response.hangman);
    let mut candidates = initialize(words, pattern.len());
    reporter.game_started(&pattern, candidates.len());

    let mut guesses = 0;
    while !response.game_ended {
        if guesses >= config.max_rounds {
            return Err(HangmanError::RoundLimitExceeded(config.max_rounds));
        }
        let guess = choose_guess(&candidates, &pattern)?;
        guesses += 1;
        reporter.guess_made(guesses, &guess, candidates.len());

        let guess_text = guess.to_string();
        response = transport.guess(&response.token, &guess_text)?;
        pattern = RevealedPattern::new(&response.hangman);
        reporter.guess_result(&response);
        if response.game_ended {
            break;
        }
        candidates = narrow_after(&candidates, guess_text, &response, pattern.clone(), config);
    }

    let summary = GameSummary {
        won: response.correct,
        guesses,
        failed_attempts: response.failed_attempts,
        final_pattern: response.hangman.clone(),
        started_at,
        elapsed: Local::now() - started_at,
    };
    info_log!(
        "Game over: won={} after {} guesses ({} failed)",
        summary.won,
        summary.guesses,
        summary.failed_attempts
    );
    reporter.game_ended(&summary);
    Ok(summary)
}

fn narrow_after(
    candidates: &CandidateSet,
    guess: String,
    response: &ServerResponse,
    pattern: RevealedPattern,
    config: &PlayerConfig,
) -> CandidateSet {
    let outcome = GuessOutcome {
        guess,
        correct: response.correct,
        pattern,
    };
    let narrowed = narrow(candidates, &outcome, config.match_mode);
    debug_log!(
        "narrow_after() - {} -> {} candidates",
        candidates.len(),
        narrowed.len()
    );
    narrowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::StrWordSource;

    /// Replays canned responses in order.
    struct ScriptedTransport {
        responses: Vec<ServerResponse>,
        sent: Vec<String>,
    }

    impl ScriptedTransport {
        fn new(mut responses: Vec<ServerResponse>) -> Self {
            responses.reverse();
            Self {
                responses,
                sent: Vec::new(),
            }
        }

        fn next(&mut self) -> Result<ServerResponse, HangmanError> {
            self.responses
                .pop()
                .ok_or_else(|| HangmanError::Transport("script exhausted".to_string()))
        }
    }

    impl GameTransport for ScriptedTransport {
        fn start_new_game(&mut self) -> Result<ServerResponse, HangmanError> {
            self.next()
        }

        fn guess(&mut self, _token: &str, guess: &str) -> Result<ServerResponse, HangmanError> {
            self.sent.push(guess.to_string());
            self.next()
        }
    }

    /// Never ends the game.
    struct EndlessTransport;

    impl GameTransport for EndlessTransport {
        fn start_new_game(&mut self) -> Result<ServerResponse, HangmanError> {
            Ok(response("___", false, 0, false))
        }

        fn guess(&mut self, _token: &str, _guess: &str) -> Result<ServerResponse, HangmanError> {
            Ok(response("___", false, 0, false))
        }
    }

    #[derive(Default)]
    struct SilentReporter {
        rounds: usize,
        ended: bool,
    }

    impl GameReporter for SilentReporter {
        fn game_started(&mut self, _pattern: &RevealedPattern, _candidate_count: usize) {}
        fn guess_made(&mut self, round: usize, _guess: &Guess, _candidate_count: usize) {
            self.rounds = round;
        }
        fn guess_result(&mut self, _response: &ServerResponse) {}
        fn game_ended(&mut self, _summary: &GameSummary) {
            self.ended = true;
        }
    }

    fn response(hangman: &str, correct: bool, failed: u32, ended: bool) -> ServerResponse {
        ServerResponse {
            token: "token".to_string(),
            hangman: hangman.to_string(),
            correct,
            failed_attempts: failed,
            game_ended: ended,
        }
    }

    #[test]
    fn test_cat_car_scenario() {
        let source = StrWordSource::new("cat\ncar\nhorse\n");
        let mut transport = ScriptedTransport::new(vec![
            response("___", false, 0, false),
            response("_a_", true, 0, false),
            response("ca_", true, 0, false),
            response("ca_", false, 1, false),
            response("cat", true, 1, true),
        ]);
        let mut reporter = SilentReporter::default();

        let summary =
            play_game(&mut transport, &source, &PlayerConfig::default(), &mut reporter).unwrap();

        // a and c tie at 2; r and t tie at 1, lowest letter first
        assert_eq!(transport.sent, vec!["a", "c", "r", "cat"]);
        assert!(summary.won);
        assert_eq!(summary.guesses, 4);
        assert_eq!(summary.failed_attempts, 1);
        assert_eq!(summary.final_pattern, "cat");
        assert_eq!(reporter.rounds, 4);
        assert!(reporter.ended);
    }

    #[test]
    fn test_game_already_ended() {
        let source = StrWordSource::new("cat\n");
        let mut transport = ScriptedTransport::new(vec![response("cat", true, 0, true)]);
        let mut reporter = SilentReporter::default();

        let summary =
            play_game(&mut transport, &source, &PlayerConfig::default(), &mut reporter).unwrap();
        assert_eq!(summary.guesses, 0);
        assert!(transport.sent.is_empty());
    }

    #[test]
    fn test_lost_game_reports_failed_attempts() {
        let source = StrWordSource::new("cat\ncar\n");
        let mut transport = ScriptedTransport::new(vec![
            response("___", false, 0, false),
            response("___", false, 6, true),
        ]);
        let mut reporter = SilentReporter::default();

        let summary =
            play_game(&mut transport, &source, &PlayerConfig::default(), &mut reporter).unwrap();
        assert!(!summary.won);
        assert_eq!(summary.guesses, 1);
        assert_eq!(summary.failed_attempts, 6);
    }

    #[test]
    fn test_round_limit() {
        let source = StrWordSource::new("aaa\nbbb\n");
        let config = PlayerConfig {
            max_rounds: 2,
            ..PlayerConfig::default()
        };
        let mut reporter = SilentReporter::default();

        let result = play_game(&mut EndlessTransport, &source, &config, &mut reporter);
        assert_eq!(result.unwrap_err(), HangmanError::RoundLimitExceeded(2));
        assert_eq!(reporter.rounds, 2);
        assert!(!reporter.ended);
    }

    #[test]
    fn test_empty_dictionary_is_error() {
        let source = StrWordSource::new("horse\n");
        let mut transport = ScriptedTransport::new(vec![response("___", false, 0, false)]);
        let mut reporter = SilentReporter::default();

        let result = play_game(&mut transport, &source, &PlayerConfig::default(), &mut reporter);
        assert_eq!(result.unwrap_err(), HangmanError::EmptyCandidateSet);
    }

    #[test]
    fn test_transport_error_propagates() {
        let source = StrWordSource::new("cat\ncar\n");
        let mut transport = ScriptedTransport::new(vec![response("___", false, 0, false)]);
        let mut reporter = SilentReporter::default();

        let result = play_game(&mut transport, &source, &PlayerConfig::default(), &mut reporter);
        assert!(matches!(result, Err(HangmanError::Transport(_))));
        assert!(!reporter.ended);
    }
}
