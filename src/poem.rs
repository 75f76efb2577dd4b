// File: src/poem.rs
//
// Light verse plumbing around the engine: stanza/line splitting and
// tail-word extraction. Producers of engine input, no phonetics here.

/// A poem as a list of stanzas, stanzas as lists of trimmed lines.
/// Blank lines separate stanzas and are never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poem {
    pub title: String,
    pub stanzas: Vec<Stanza>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza {
    pub lines: Vec<String>,
}

impl Poem {
    /// Splits raw text into stanzas on blank lines. The title defaults to
    /// the first line unless one is given.
    pub fn from_text(text: &str) -> Self {
        let mut stanzas = Vec::new();
        let mut current: Vec<String> = Vec::new();
        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    stanzas.push(Stanza {
                        lines: std::mem::take(&mut current),
                    });
                }
            } else {
                current.push(line.to_string());
            }
        }
        if !current.is_empty() {
            stanzas.push(Stanza { lines: current });
        }

        let title = stanzas
            .first()
            .and_then(|s| s.lines.first())
            .cloned()
            .unwrap_or_default();
        Poem { title, stanzas }
    }

    pub fn with_title(text: &str, title: &str) -> Self {
        let mut poem = Self::from_text(text);
        poem.title = title.to_string();
        poem
    }

    /// All lines across stanzas, in reading order. This is the shape the
    /// engine takes as input.
    pub fn lines(&self) -> Vec<String> {
        self.stanzas
            .iter()
            .flat_map(|s| s.lines.iter().cloned())
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.stanzas.iter().map(|s| s.lines.len()).sum()
    }
}

/// The last whitespace-delimited token of a line; the whole line when it
/// holds no whitespace. This is the word that carries the rhyme.
pub fn tail_word(line: &str) -> &str {
    line.trim().rsplit(char::is_whitespace).next().unwrap_or(line)
}

/// Removes the ASCII punctuation set. Re-exported from the decomposer so
/// report code doesn't need to reach into `core`.
pub use crate::core::decompose::strip_punctuation;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_separate_stanzas() {
        let poem = Poem::from_text("one\ntwo\n\nthree\nfour\n");
        assert_eq!(poem.stanzas.len(), 2);
        assert_eq!(poem.stanzas[0].lines, vec!["one", "two"]);
        assert_eq!(poem.stanzas[1].lines, vec!["three", "four"]);
    }

    #[test]
    fn test_consecutive_blanks_collapse() {
        let poem = Poem::from_text("one\n\n\n\ntwo\n");
        assert_eq!(poem.stanzas.len(), 2);
        assert_eq!(poem.line_count(), 2);
    }

    #[test]
    fn test_single_line_stanzas() {
        let poem = Poem::from_text("a\n\nb\n\nc\n\nd\n\ne\n");
        assert_eq!(poem.stanzas.len(), 5);
        assert_eq!(poem.line_count(), 5);
    }

    #[test]
    fn test_trailing_stanza_without_blank_line() {
        let poem = Poem::from_text("one\n\ntwo");
        assert_eq!(poem.stanzas.len(), 2);
    }

    #[test]
    fn test_title_defaults_to_first_line() {
        let poem = Poem::from_text("From Clee to heaven the beacon burns,\nmore\n");
        assert_eq!(poem.title, "From Clee to heaven the beacon burns,");
        assert_eq!(Poem::with_title("body\n", "A Shropshire Lad").title, "A Shropshire Lad");
    }

    #[test]
    fn test_lines_flatten_in_reading_order() {
        let poem = Poem::from_text("one\ntwo\n\nthree\n");
        assert_eq!(poem.lines(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_tail_word() {
        assert_eq!(tail_word("The shires have seen it plain,"), "plain,");
        assert_eq!(tail_word("  spaced out   "), "out");
        assert_eq!(tail_word("single"), "single");
    }
}
