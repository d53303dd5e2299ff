//! Exclusion rule tables
//!
//! Two immutable word sets drive the classifier's exclusions: words that
//! may not immediately precede the trigger word ("drum set") and words that
//! may not immediately follow it ("set up"). Tables are built once and
//! passed explicitly; nothing here is process-global.

use std::collections::BTreeSet;

/// Words that, directly before "set", mark a compound noun
pub const DEFAULT_EXCLUDE_PREVIOUS: &[&str] = &["box", "drum", "skill", "sun"];

/// Words that, directly after "set", mark a verb or unrelated sense
pub const DEFAULT_EXCLUDE_NEXT: &[&str] = &[
    "against", "her", "him", "in", "it", "of", "off", "out", "up", "the",
];

/// Immutable exclusion vocabularies
///
/// Words are stored lowercased; lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTables {
    exclude_previous: BTreeSet<String>,
    exclude_next: BTreeSet<String>,
}

impl RuleTables {
    /// Build tables from arbitrary word lists
    pub fn new<P, N>(exclude_previous: P, exclude_next: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            exclude_previous: normalize(exclude_previous),
            exclude_next: normalize(exclude_next),
        }
    }

    /// Tables with no exclusions at all
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new(), Vec::<String>::new())
    }

    /// Whether `word` directly before the trigger forces exclusion
    pub fn excludes_previous(&self, word: &str) -> bool {
        self.exclude_previous.contains(&word.to_lowercase())
    }

    /// Whether `word` directly after the trigger forces exclusion
    pub fn excludes_next(&self, word: &str) -> bool {
        self.exclude_next.contains(&word.to_lowercase())
    }

    /// Iterate the previous-word exclusions in sorted order
    pub fn exclude_previous(&self) -> impl Iterator<Item = &str> {
        self.exclude_previous.iter().map(String::as_str)
    }

    /// Iterate the next-word exclusions in sorted order
    pub fn exclude_next(&self) -> impl Iterator<Item = &str> {
        self.exclude_next.iter().map(String::as_str)
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE_PREVIOUS, DEFAULT_EXCLUDE_NEXT)
    }
}

fn normalize<I>(words: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
