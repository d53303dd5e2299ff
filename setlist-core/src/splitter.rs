//! Sentence splitting for raw transcript text
//!
//! A sentence ends at a terminator character immediately followed by
//! whitespace. A `.` does not end a sentence when it closes:
//!
//! - a dotted abbreviation such as "e.g." or "U.S.",
//! - a two-letter title such as "Mr." or "Dr.",
//! - a single-letter initial such as "J." (the pronoun "I." still ends one),
//! - one of the configured abbreviations ("Mrs.", "Prof.").
//!
//! Splitting is lazy and borrows from the input; calling
//! [`SentenceSplitter::split`] again restarts from the beginning.

use std::collections::BTreeSet;

/// Characters that end a sentence by default
pub const DEFAULT_TERMINATORS: &[char] = &['.', '?'];

/// Abbreviations not caught by the structural rules
pub const DEFAULT_ABBREVIATIONS: &[&str] = &["Mrs", "Prof", "Jr", "Sr", "vs"];

/// Rule-driven sentence splitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSplitter {
    terminators: Vec<char>,
    abbreviations: BTreeSet<String>,
}

impl SentenceSplitter {
    /// Create a splitter with explicit terminators and abbreviations
    pub fn new<I>(terminators: Vec<char>, abbreviations: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            terminators,
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    /// Terminator characters in use
    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }

    /// Configured abbreviations, lowercased
    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.abbreviations.iter().map(String::as_str)
    }

    /// Lazily split `text` into trimmed, non-empty sentences
    pub fn split<'a>(&'a self, text: &'a str) -> Sentences<'a> {
        Sentences {
            splitter: self,
            text,
            pos: 0,
        }
    }

    /// Whether the whitespace at byte `pos` closes a sentence
    fn is_boundary(&self, text: &str, pos: usize) -> bool {
        let before = &text[..pos];
        let Some(last) = before.chars().next_back() else {
            return false;
        };
        if !self.terminators.contains(&last) {
            return false;
        }
        if last != '.' {
            return true;
        }

        let body = &before[..before.len() - last.len_utf8()];
        let stem = body
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default()
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        !(is_dotted(stem)
            || is_title(stem)
            || is_initial(stem)
            || self.abbreviations.contains(&stem.to_lowercase()))
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATORS.to_vec(), DEFAULT_ABBREVIATIONS)
    }
}

/// "e.g", "U.S", "a.m": a word character, a dot, then a word character
fn is_dotted(stem: &str) -> bool {
    let mut tail = stem.chars().rev();
    matches!(
        (tail.next(), tail.next(), tail.next()),
        (Some(a), Some('.'), Some(b)) if is_word_char(a) && is_word_char(b)
    )
}

/// "Mr", "Dr", "St"
fn is_title(stem: &str) -> bool {
    let mut chars = stem.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), None) if a.is_ascii_uppercase() && b.is_ascii_lowercase()
    )
}

/// "J" in "J. Smith", but not the pronoun "I"
fn is_initial(stem: &str) -> bool {
    let mut chars = stem.chars();
    matches!((chars.next(), chars.next()), (Some(a), None) if a.is_uppercase() && a != 'I')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Iterator over the sentences of a text
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    splitter: &'a SentenceSplitter,
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let start = self.pos + rest.find(|c: char| !c.is_whitespace())?;

        for (offset, ch) in self.text[start..].char_indices() {
            let at = start + offset;
            if ch.is_whitespace() && self.splitter.is_boundary(self.text, at) {
                self.pos = at + ch.len_utf8();
                return Some(self.text[start..at].trim_end());
            }
        }

        self.pos = self.text.len();
        Some(self.text[start..].trim_end())
    }
}

/// Collapse every whitespace run to a single space and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
