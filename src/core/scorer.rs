// File: src/core/scorer.rs
use crate::core::decompose::decompose;
use crate::core::dictionary::Dictionary;
use crate::core::types::{Decomposition, Phoneme};

/// Points for a matching rhyme nucleus (first aligned coda pair).
pub const NUCLEUS_WEIGHT: u32 = 10;
/// Points per matching coda phoneme past the nucleus.
pub const CODA_WEIGHT: u32 = 3;
/// Points per matching onset phoneme.
pub const ONSET_WEIGHT: u32 = 1;

/// Running totals for a periphery comparison.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    earned: u32,
    possible: u32,
}

/// Compares two phoneme runs position by position from the start.
///
/// Every aligned pair contributes its weight to the possible total and
/// earns it only on exact equality; the first pair can carry a distinct
/// nucleus weight. A length mismatch adds the absolute difference to the
/// possible total with nothing earned, so trailing extra phonemes dilute
/// the score instead of being ignored.
fn eval_periphery(a: &[Phoneme], b: &[Phoneme], unit_pts: u32, nucleus_pts: u32, tally: &mut Tally) {
    for (idx, (pa, pb)) in a.iter().zip(b.iter()).enumerate() {
        let points = if idx == 0 { nucleus_pts } else { unit_pts };
        if pa == pb {
            tally.earned += points;
        }
        tally.possible += points;
    }
    tally.possible += a.len().abs_diff(b.len()) as u32;
}

/// Rates how closely two words rhyme, in `[0.0, 1.0]`.
///
/// Both words are decomposed at their final vowel; the codas are compared
/// with the nucleus dominating (10 points) and each further tail phoneme
/// worth 3, then the onsets at 1 point each. The result is earned points
/// over possible points. Vowel-nucleus agreement dominating the consonant
/// tail, which in turn outweighs the leading consonants, matches how rhyme
/// is heard in verse.
///
/// A word whose pronunciation has no vowel to anchor on (including most
/// out-of-vocabulary fallbacks) rates 0.0 against everything - bad input
/// degrades the score, never the analysis.
pub fn score(word_a: &str, word_b: &str, dictionary: &Dictionary) -> f64 {
    let (onset_a, coda_a) = match decompose(word_a, dictionary) {
        Decomposition::Split { onset, coda } => (onset, coda),
        Decomposition::Unsplit(_) => return 0.0,
    };
    let (onset_b, coda_b) = match decompose(word_b, dictionary) {
        Decomposition::Split { onset, coda } => (onset, coda),
        Decomposition::Unsplit(_) => return 0.0,
    };

    let mut tally = Tally::default();
    eval_periphery(&coda_a, &coda_b, CODA_WEIGHT, NUCLEUS_WEIGHT, &mut tally);
    eval_periphery(&onset_a, &onset_b, ONSET_WEIGHT, ONSET_WEIGHT, &mut tally);

    if tally.possible == 0 {
        return 0.0;
    }
    f64::from(tally.earned) / f64::from(tally.possible)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_text(
            "cat  K AE1 T\n\
             rat  R AE1 T\n\
             dog  D AO1 G\n\
             light  L AY1 T\n\
             bright  B R AY1 T\n\
             ten  T EH1 N\n\
             xylophone  Z AY1 L AH0 F OW2 N\n\
             shh  SH\n",
        )
        .unwrap()
    }

    #[test]
    fn test_identical_word_scores_one() {
        assert_eq!(score("cat", "cat", &dict()), 1.0);
    }

    #[test]
    fn test_disjoint_phonemes_score_zero() {
        assert_eq!(score("cat", "xylophone", &dict()), 0.0);
        assert_eq!(score("cat", "dog", &dict()), 0.0);
    }

    #[test]
    fn test_close_rhyme_beats_threshold() {
        // coda 13/13, onset 0/1 -> 13/14
        let s = score("cat", "rat", &dict());
        assert!(s > 0.7, "expected cat/rat above threshold, got {s}");
        assert!((s - 13.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_onset_length_mismatch_dilutes() {
        // light/bright: coda 13/13, onsets L vs B R -> 0 of 1 aligned + 1 diff
        let s = score("light", "bright", &dict());
        assert!((s - 13.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_symmetric() {
        let d = dict();
        for (a, b) in [("cat", "rat"), ("light", "bright"), ("cat", "dog"), ("ten", "light")] {
            assert_eq!(score(a, b, &d), score(b, a, &d));
        }
    }

    #[test]
    fn test_no_vowel_pronunciation_scores_zero() {
        // "shh" has no digit-marked phoneme, so it cannot be rated
        assert_eq!(score("shh", "shh", &dict()), 0.0);
        assert_eq!(score("shh", "cat", &dict()), 0.0);
    }

    #[test]
    fn test_unknown_words_score_zero() {
        assert_eq!(score("zzyzx", "zzyzx", &dict()), 0.0);
    }
}
