// File: src/core/decompose.rs
//
// Stress handling and onset/coda splitting. The split the scorer relies on
// anchors the coda at the word's final vowel, which in the CMU alphabet is
// the last phoneme carrying a stress digit (0/1/2 - digit 0 still marks a
// vowel, it just marks an unstressed one).

use crate::core::dictionary::Dictionary;
use crate::core::types::{Decomposition, Phoneme, Pronunciation, Stress};
use crate::error::{Result, RhymeError};

/// Removes the ASCII punctuation set from a word, e.g. `"to-night:"` ->
/// `"tonight"`. Dictionary keys never contain punctuation, raw verse often
/// does.
pub fn strip_punctuation(word: &str) -> String {
    word.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Index of the leftmost phoneme with the highest stress rank
/// (primary > secondary > none).
///
/// An empty sequence is a precondition violation on the caller's side and
/// fails loudly rather than picking a fake index.
pub fn max_stress_index(phonemes: &[Phoneme]) -> Result<usize> {
    if phonemes.is_empty() {
        return Err(RhymeError::EmptyPhonemes);
    }
    let best = phonemes
        .iter()
        .map(Phoneme::stress)
        .max()
        .unwrap_or(Stress::None);
    // position() finds the leftmost occurrence, which settles ties.
    let idx = phonemes
        .iter()
        .position(|p| p.stress() == best)
        .expect("max exists, so some element attains it");
    Ok(idx)
}

/// Splits a pronunciation before its maximum-stress phoneme.
///
/// Alternate strategy to [`split_at_final_vowel`]; kept for callers that
/// want the stressed syllable rather than the final one as the rhyme
/// anchor. Not used by the scorer.
pub fn split_at_max_stress(phonemes: &[Phoneme]) -> Result<(Vec<Phoneme>, Vec<Phoneme>)> {
    let idx = max_stress_index(phonemes)?;
    Ok((phonemes[..idx].to_vec(), phonemes[idx..].to_vec()))
}

/// Splits a pronunciation at its final vowel: the coda is the last
/// digit-marked phoneme and everything after it, the onset everything
/// before. A sequence with no digit-marked phoneme at all has no nucleus
/// to rhyme on and comes back [`Decomposition::Unsplit`].
pub fn split_at_final_vowel(phonemes: &[Phoneme]) -> Decomposition {
    match phonemes.iter().rposition(Phoneme::is_marked) {
        Some(idx) => Decomposition::Split {
            onset: phonemes[..idx].to_vec(),
            coda: phonemes[idx..].to_vec(),
        },
        None => Decomposition::Unsplit(phonemes.to_vec()),
    }
}

/// Looks up `word` (punctuation stripped, case-folded) and splits its first
/// listed pronunciation at the final vowel.
///
/// Out-of-vocabulary words degrade to a single literal token standing in
/// for a pronunciation; that almost never splits, so unknown words rarely
/// rhyme with anything. Callers must tolerate the quality loss.
///
/// Known simplification: for words with several pronunciations this always
/// takes the first listed one, which is not guaranteed to be the most
/// common reading.
pub fn decompose(word: &str, dictionary: &Dictionary) -> Decomposition {
    let cleaned = strip_punctuation(word);
    let fallback: Pronunciation;
    let phonemes = match dictionary.lookup(&cleaned).first() {
        Some(pronunciation) => pronunciation.as_slice(),
        None => {
            fallback = vec![Phoneme::new(&cleaned)];
            fallback.as_slice()
        }
    };
    split_at_final_vowel(phonemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phonemes(tokens: &str) -> Vec<Phoneme> {
        tokens.split(' ').map(Phoneme::new).collect()
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("to-night:"), "tonight");
        assert_eq!(strip_punctuation("Queen."), "Queen");
        assert_eq!(strip_punctuation("plain"), "plain");
    }

    #[test]
    fn test_max_stress_index_prefers_primary() {
        // B IH0 G AE1 T -> the AE1 at index 3
        assert_eq!(max_stress_index(&phonemes("B IH0 G AE1 T")).unwrap(), 3);
    }

    #[test]
    fn test_max_stress_index_tie_takes_leftmost() {
        assert_eq!(max_stress_index(&phonemes("AE1 B AE1")).unwrap(), 0);
    }

    #[test]
    fn test_max_stress_index_primary_beats_secondary() {
        // OW2 before AH1: raw digit order would pick OW2, rank order must not
        assert_eq!(max_stress_index(&phonemes("OW2 V AH1 N")).unwrap(), 2);
    }

    #[test]
    fn test_max_stress_index_empty_is_error() {
        assert!(matches!(
            max_stress_index(&[]),
            Err(RhymeError::EmptyPhonemes)
        ));
    }

    #[test]
    fn test_split_at_max_stress_round_trip() {
        let seq = phonemes("R IH0 T ER1 N Z");
        let (head, tail) = split_at_max_stress(&seq).unwrap();
        assert_eq!(head, phonemes("R IH0 T"));
        assert_eq!(tail, phonemes("ER1 N Z"));
    }

    #[test]
    fn test_split_at_final_vowel() {
        match split_at_final_vowel(&phonemes("Z AY1 L AH0 F OW2 N")) {
            Decomposition::Split { onset, coda } => {
                assert_eq!(onset, phonemes("Z AY1 L AH0 F"));
                assert_eq!(coda, phonemes("OW2 N"));
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_split_anchors_on_unstressed_vowel() {
        // Digit 0 is still a vowel marker.
        match split_at_final_vowel(&phonemes("DH AH0")) {
            Decomposition::Split { onset, coda } => {
                assert_eq!(onset, phonemes("DH"));
                assert_eq!(coda, phonemes("AH0"));
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_split_round_trip_reproduces_sequence() {
        let seq = phonemes("B R AY1 T");
        match split_at_final_vowel(&seq) {
            Decomposition::Split { mut onset, coda } => {
                onset.extend(coda);
                assert_eq!(onset, seq);
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_no_vowel_is_unsplit() {
        let seq = phonemes("SH T");
        assert_eq!(split_at_final_vowel(&seq), Decomposition::Unsplit(seq));
    }

    #[test]
    fn test_decompose_strips_punctuation_before_lookup() {
        let dict = Dictionary::from_text("cat  K AE1 T\n").unwrap();
        match decompose("cat,", &dict) {
            Decomposition::Split { coda, .. } => assert_eq!(coda, phonemes("AE1 T")),
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_decompose_unknown_word_falls_back_to_literal() {
        let dict = Dictionary::from_text("cat  K AE1 T\n").unwrap();
        assert_eq!(
            decompose("zzyzx", &dict),
            Decomposition::Unsplit(vec![Phoneme::new("zzyzx")])
        );
    }

    #[test]
    fn test_decompose_uses_first_pronunciation() {
        let dict = Dictionary::from_text("the  DH AH0\nthe  DH IY0\n").unwrap();
        match decompose("the", &dict) {
            Decomposition::Split { coda, .. } => assert_eq!(coda, phonemes("AH0")),
            other => panic!("expected split, got {other:?}"),
        }
    }
}
