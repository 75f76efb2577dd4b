// File: src/core/dictionary.rs
use crate::core::types::{Phoneme, Pronunciation};
use crate::error::{Result, RhymeError};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// An in-memory pronunciation dictionary in the CMU flat-file format.
///
/// Each record line is `WORD<two spaces>PHONEME PHONEME ...`; lines starting
/// with `;` are comments and blank lines are ignored. Words are case-folded
/// to lowercase on insertion, and repeated records for the same word are
/// appended rather than overwritten - alternate pronunciations materially
/// affect rhyme judgments (e.g. "the" has two common readings), so clobbering
/// them would be a real quality loss.
///
/// Built once, read-only afterwards. Lookups are O(1) in the number of
/// entries.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<Pronunciation>>,
    record_count: usize,
}

const RECORD_DELIMITER: &str = "  ";

impl Dictionary {
    /// Parses a dictionary from any reader.
    ///
    /// Fails with [`RhymeError::MalformedEntry`] on the first record line
    /// that does not split into exactly a word field and a phoneme-list
    /// field on the two-space delimiter. The offending line and its
    /// 1-based number are carried in the error for diagnostics.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut dict = Dictionary::default();
        let buffered = BufReader::new(reader);
        for (idx, line) in buffered.lines().enumerate() {
            let line = line?;
            dict.insert_line(&line, idx + 1)?;
        }
        log::debug!(
            "loaded pronunciation dictionary: {} words, {} records",
            dict.entries.len(),
            dict.record_count
        );
        Ok(dict)
    }

    /// Loads a dictionary file from disk.
    ///
    /// The upstream cmudict distribution is Latin-1 encoded; non-UTF-8
    /// bytes only ever occur in comment text, so the contents are decoded
    /// lossily rather than rejected.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read(path)?;
        let text = String::from_utf8_lossy(&raw);
        Self::from_text(&text)
    }

    /// Parses a dictionary from an in-memory string.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut dict = Dictionary::default();
        for (idx, line) in text.lines().enumerate() {
            dict.insert_line(line, idx + 1)?;
        }
        log::debug!(
            "loaded pronunciation dictionary: {} words, {} records",
            dict.entries.len(),
            dict.record_count
        );
        Ok(dict)
    }

    /// The sample lexicon embedded at compile time, enough for the demo
    /// binaries and tests. Panics only if the embedded file is malformed,
    /// which a test below rules out.
    pub fn sample() -> Self {
        let text = include_str!("../../data/cmudict_sample.txt");
        Self::from_text(text).expect("embedded cmudict_sample.txt is malformed")
    }

    fn insert_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        let trimmed = line.trim_end();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            return Ok(());
        }

        let fields: Vec<&str> = trimmed.split(RECORD_DELIMITER).collect();
        let (word, phoneme_field) = match fields.as_slice() {
            [word, phonemes] if !word.is_empty() && !phonemes.is_empty() => (word, phonemes),
            _ => {
                return Err(RhymeError::MalformedEntry {
                    line_no,
                    line: line.to_string(),
                })
            }
        };

        let pronunciation: Pronunciation = phoneme_field
            .split(' ')
            .filter(|tok| !tok.is_empty())
            .map(Phoneme::new)
            .collect();
        if pronunciation.is_empty() {
            return Err(RhymeError::MalformedEntry {
                line_no,
                line: line.to_string(),
            });
        }

        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(pronunciation);
        self.record_count += 1;
        Ok(())
    }

    /// All pronunciations recorded for `word`, in file order. Unknown words
    /// get an empty slice, not an error; the out-of-vocabulary policy lives
    /// with the caller.
    pub fn lookup(&self, word: &str) -> &[Pronunciation] {
        self.entries
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
