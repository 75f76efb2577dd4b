// File: src/core/cluster.rs
use crate::core::dictionary::Dictionary;
use crate::core::scorer::score;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default minimum score for two words to count as rhyming.
pub const DEFAULT_RHYME_THRESHOLD: f64 = 0.7;

/// A set of distinct words judged to rhyme with one another.
///
/// Backed by an insertion-ordered vec rather than a hash set so that the
/// representative element - the first-inserted member - is stable across
/// runs. Membership inserts are idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeGroup {
    members: Vec<String>,
}

impl RhymeGroup {
    fn from_pair(a: &str, b: &str) -> Self {
        let mut group = RhymeGroup::default();
        group.insert(a);
        group.insert(b);
        group
    }

    fn insert(&mut self, word: &str) {
        if !self.contains(word) {
            self.members.push(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.members.iter().any(|m| m == word)
    }

    /// The first-inserted member, used as the stand-in when testing whether
    /// a new pair belongs to this group.
    pub fn representative(&self) -> &str {
        &self.members[0]
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A line's place in the rhyme scheme: a group index, or unclassified when
/// its tail word landed in no group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RhymeLabel {
    Group(usize),
    Unclassified,
}

impl fmt::Display for RhymeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhymeLabel::Group(idx) => write!(f, "group-{idx}"),
            RhymeLabel::Unclassified => f.write_str("default"),
        }
    }
}

/// One label per input line, in input order.
pub type RhymeAssignment = Vec<RhymeLabel>;

/// Partitions `words` into rhyme groups by greedy single-link clustering.
///
/// All unordered pairs `(i, j)` with `i < j` are scored in lexicographic
/// index order. A pair above `threshold` first tries to join an existing
/// group: the pair's first word is scored against each group's
/// representative in creation order, and the first group above threshold
/// takes both words. Otherwise the pair founds a new group. The enumeration
/// and scan orders are the tie-break and must stay fixed for reproducible
/// output.
///
/// Words never appearing in a qualifying pair end up in no group. Duplicate
/// input words rhyme with themselves (score 1.0) and collapse into one
/// membership. O(n^2) pairs, fine at poem scale.
pub fn cluster(words: &[String], dictionary: &Dictionary, threshold: f64) -> Vec<RhymeGroup> {
    let mut groups: Vec<RhymeGroup> = Vec::new();

    for i in 0..words.len() {
        for j in (i + 1)..words.len() {
            let (first, second) = (&words[i], &words[j]);
            if score(first, second, dictionary) <= threshold {
                continue;
            }
            let existing = groups
                .iter_mut()
                .find(|group| score(first, group.representative(), dictionary) > threshold);
            match existing {
                Some(group) => {
                    group.insert(first);
                    group.insert(second);
                }
                None => {
                    log::debug!("new rhyme group from pair ({first}, {second})");
                    groups.push(RhymeGroup::from_pair(first, second));
                }
            }
        }
    }

    groups
}

/// Labels each tail word with the first group (in creation order) that
/// contains it, or [`RhymeLabel::Unclassified`]. Output is parallel to
/// `tail_words`, and therefore to the lines they were taken from.
pub fn classify(tail_words: &[String], groups: &[RhymeGroup]) -> RhymeAssignment {
    tail_words
        .iter()
        .map(|word| {
            groups
                .iter()
                .position(|group| group.contains(word))
                .map(RhymeLabel::Group)
                .unwrap_or(RhymeLabel::Unclassified)
        })
        .collect()
}
