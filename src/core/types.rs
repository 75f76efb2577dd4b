// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single phoneme token as it appears in the dictionary, e.g. "K" or "AE1".
///
/// Vowel phonemes carry a trailing stress digit (0 = unstressed, 1 = primary,
/// 2 = secondary); consonants carry none. The token is otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phoneme(pub String);

impl Phoneme {
    pub fn new(token: &str) -> Self {
        Phoneme(token.to_string())
    }

    /// The raw stress digit, if the token ends in one.
    pub fn stress_digit(&self) -> Option<u8> {
        self.0
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
    }

    /// Stress rank for comparisons. Digit 1 outranks digit 2, which outranks
    /// digit 0 and unmarked tokens.
    pub fn stress(&self) -> Stress {
        match self.stress_digit() {
            Some(1) => Stress::Primary,
            Some(2) => Stress::Secondary,
            _ => Stress::None,
        }
    }

    /// Whether the token carries any stress digit at all. Digit 0 counts:
    /// an unstressed vowel is still a vowel.
    pub fn is_marked(&self) -> bool {
        self.stress_digit().is_some()
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Comparison order for stress markers: primary > secondary > none.
/// Note this inverts the raw digit order, where 1 is primary and 2 secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stress {
    None,
    Secondary,
    Primary,
}

/// One way to say a word: an ordered, non-empty phoneme sequence.
/// A word may have several of these; the dictionary keeps them all in
/// insertion order.
pub type Pronunciation = Vec<Phoneme>;

/// A pronunciation split for rhyme comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition {
    /// The usual case: `coda` starts at the rightmost vowel (last phoneme
    /// with a stress digit) and runs to the end; `onset` is everything
    /// before it. `onset ++ coda` reproduces the original sequence.
    Split {
        onset: Vec<Phoneme>,
        coda: Vec<Phoneme>,
    },
    /// No phoneme carried a stress digit, so there is no rhyme nucleus to
    /// anchor on. The scorer treats this as unrateable (score 0.0).
    Unsplit(Vec<Phoneme>),
}
