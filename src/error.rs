// File: src/error.rs
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = RhymeError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum RhymeError {
    /// A non-comment dictionary line that does not split into a word field
    /// and a phoneme-list field on the two-space delimiter.
    #[error("malformed dictionary entry at line {line_no}: {line:?}")]
    MalformedEntry { line_no: usize, line: String },

    /// An empty phoneme sequence was handed to stress computation.
    /// This is a caller bug, not a recoverable input condition.
    #[error("empty phoneme sequence")]
    EmptyPhonemes,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
