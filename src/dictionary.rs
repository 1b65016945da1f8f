//! Candidate word set and the narrowing rules applied after each guess.

use crate::debug_log;
use crate::pattern::RevealedPattern;

/// How a correct guess narrows the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Keep any word that contains the guess somewhere.
    #[default]
    Substring,
    /// Keep only words agreeing with every revealed position of the pattern.
    Positional,
}

/// Result of submitting a guess, as needed for narrowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: String,
    pub correct: bool,
    pub pattern: RevealedPattern,
}

/// Words still consistent with everything the server has revealed.
///
/// All words share one length. A set is never edited in place: narrowing
/// produces a new set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSet {
    words: Vec<String>,
}

impl CandidateSet {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The only remaining word, if exactly one is left.
    pub fn single(&self) -> Option<&str> {
        match self.words.as_slice() {
            [word] => Some(word.as_str()),
            _ => None,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Keep the words whose length equals the hidden word's length.
pub fn initialize<I>(words: I, hidden_word_length: usize) -> CandidateSet
where
    I: IntoIterator<Item = String>,
{
    let words: Vec<String> = words
        .into_iter()
        .filter(|word| word.chars().count() == hidden_word_length)
        .collect();
    debug_log!(
        "initialize() - {} candidates of length {}",
        words.len(),
        hidden_word_length
    );
    CandidateSet { words }
}

/// Narrow `candidates` by one guess outcome. Never grows the set.
pub fn narrow(candidates: &CandidateSet, outcome: &GuessOutcome, mode: MatchMode) -> CandidateSet {
    let guess = outcome.guess.as_str();
    let words: Vec<String> = candidates
        .words
        .iter()
        .filter(|word| {
            if !outcome.correct {
                return !word.contains(guess);
            }
            match mode {
                MatchMode::Substring => word.contains(guess),
                MatchMode::Positional => matches_positionally(word, guess, &outcome.pattern),
            }
        })
        .cloned()
        .collect();
    debug_log!(
        "narrow() - guess '{}' correct={} kept {} of {}",
        guess,
        outcome.correct,
        words.len(),
        candidates.len()
    );
    CandidateSet { words }
}

fn matches_positionally(word: &str, guess: &str, pattern: &RevealedPattern) -> bool {
    if guess.chars().count() > 1 {
        return word == guess;
    }
    if !word.contains(guess) || word.chars().count() != pattern.len() {
        return false;
    }
    word.chars().enumerate().all(|(i, c)| match pattern.revealed_at(i) {
        Some(shown) => c == shown,
        // The server reveals every occurrence, so a hidden slot can't hold a guessed letter.
        None => !guess.starts_with(c) && !pattern.contains_letter(c),
    })
}
