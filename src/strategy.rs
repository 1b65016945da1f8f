use crate::debug_log;
use crate::dictionary::CandidateSet;
use crate::error::HangmanError;
use crate::pattern::RevealedPattern;
use std::collections::BTreeMap;
use std::fmt;

/// What gets submitted to the server: a single letter or a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Word(String),
}

impl Guess {
    pub fn is_word(&self) -> bool {
        matches!(self, Guess::Word(_))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guess::Letter(c) => write!(f, "{c}"),
            Guess::Word(w) => write!(f, "{w}"),
        }
    }
}

/// Total occurrences of each letter across all candidates.
///
/// A letter repeated within a word counts once per occurrence, so "aab"
/// contributes 2 to `a`. Non-alphabetic characters are ignored.
pub fn letter_frequencies(candidates: &CandidateSet) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for word in candidates.iter() {
        for c in word.chars().filter(|c| c.is_alphabetic()) {
            *freq.entry(c).or_insert(0) += 1;
        }
    }
    freq
}

/// Most frequent letter not yet shown in `pattern`. Ties go to the lowest letter.
pub fn most_frequent_unrevealed(
    freq: &BTreeMap<char, usize>,
    pattern: &RevealedPattern,
) -> Option<char> {
    let mut best: Option<(char, usize)> = None;
    for (&letter, &count) in freq {
        if pattern.contains_letter(letter) {
            continue;
        }
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((letter, count));
        }
    }
    best.map(|(letter, _)| letter)
}

/// Pick the next guess for the current candidates.
///
/// # Errors
///
/// Returns `HangmanError::EmptyCandidateSet` when nothing is left to guess from.
pub fn choose_guess(
    candidates: &CandidateSet,
    pattern: &RevealedPattern,
) -> Result<Guess, HangmanError> {
    if let Some(word) = candidates.single() {
        return Ok(Guess::Word(word.to_string()));
    }
    let freq = letter_frequencies(candidates);
    if let Some(letter) = most_frequent_unrevealed(&freq, pattern) {
        debug_log!(
            "choose_guess() - '{}' scores {} over {} candidates",
            letter,
            freq[&letter],
            candidates.len()
        );
        return Ok(Guess::Letter(letter));
    }
    // Every remaining letter is already shown; submit any candidate whole.
    candidates
        .iter()
        .next()
        .map(|word| Guess::Word(word.to_string()))
        .ok_or(HangmanError::EmptyCandidateSet)
}
