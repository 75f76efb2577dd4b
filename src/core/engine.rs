// File: src/core/engine.rs
use crate::core::cluster::{classify, cluster, RhymeAssignment, RhymeGroup, DEFAULT_RHYME_THRESHOLD};
use crate::core::dictionary::Dictionary;
use crate::core::scorer;
use crate::poem::{strip_punctuation, tail_word};
use serde::Serialize;

/// Everything a reporting layer needs about one analyzed poem: the lines,
/// the tail words actually compared, the rhyme groups, and the per-line
/// labels (parallel to `lines`).
#[derive(Debug, Clone, Serialize)]
pub struct PoemAnalysis {
    pub lines: Vec<String>,
    pub tail_words: Vec<String>,
    pub groups: Vec<RhymeGroup>,
    pub assignment: RhymeAssignment,
}

/// The rhyme engine owns an immutable dictionary and a match threshold and
/// composes the scorer and clusterer behind one entry point.
pub struct RhymeEngine {
    dictionary: Dictionary,
    threshold: f64,
}

impl RhymeEngine {
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_threshold(dictionary, DEFAULT_RHYME_THRESHOLD)
    }

    pub fn with_threshold(dictionary: Dictionary, threshold: f64) -> Self {
        Self {
            dictionary,
            threshold,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Rates how closely two words rhyme, in `[0.0, 1.0]`.
    pub fn score(&self, word_a: &str, word_b: &str) -> f64 {
        scorer::score(word_a, word_b, &self.dictionary)
    }

    /// Groups a list of tail words into rhyme groups.
    pub fn rhyme_groups(&self, tail_words: &[String]) -> Vec<RhymeGroup> {
        cluster(tail_words, &self.dictionary, self.threshold)
    }

    /// Labels tail words against already-built groups.
    pub fn classify(&self, tail_words: &[String], groups: &[RhymeGroup]) -> RhymeAssignment {
        classify(tail_words, groups)
    }

    /// Full pipeline over the lines of a poem (blank lines already removed).
    pub fn analyze(&self, lines: &[String]) -> PoemAnalysis {
        // 1. Pull each line's rhyme-bearing tail word, cleaned for lookup
        let tail_words: Vec<String> = lines
            .iter()
            .map(|line| strip_punctuation(tail_word(line)))
            .collect();

        // 2. Cluster the tails into rhyme groups
        let groups = self.rhyme_groups(&tail_words);
        log::debug!(
            "clustered {} lines into {} rhyme groups",
            lines.len(),
            groups.len()
        );

        // 3. Label every line by the first group holding its tail
        let assignment = self.classify(&tail_words, &groups);

        PoemAnalysis {
            lines: lines.to_vec(),
            tail_words,
            groups,
            assignment,
        }
    }
}
