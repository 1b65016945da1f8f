//! The partially revealed hidden word, as reported by the server.

use std::fmt;

/// Marks a position the server has not revealed yet.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedPattern {
    chars: Vec<char>,
}

impl RevealedPattern {
    pub fn new(hangman: &str) -> Self {
        Self {
            chars: hangman.trim().to_lowercase().chars().collect(),
        }
    }

    /// Length of the hidden word, in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True if `letter` is already shown somewhere in the pattern.
    pub fn contains_letter(&self, letter: char) -> bool {
        letter != PLACEHOLDER && self.chars.contains(&letter)
    }

    pub fn is_solved(&self) -> bool {
        !self.chars.is_empty() && !self.chars.contains(&PLACEHOLDER)
    }

    /// Revealed letter at `index`, or `None` while it is still hidden.
    pub fn revealed_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied().filter(|&c| c != PLACEHOLDER)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for RevealedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
