//! Setlist-mention classification
//!
//! Decides whether a sentence genuinely talks about a concert setlist or
//! merely uses the word "set" in some other sense ("set up", "drum set").
//! The decision runs in two stages:
//!
//! 1. A coarse pre-filter admits any sentence containing "set".
//! 2. A token-level stage inspects the first word containing "set" and its
//!    immediate neighbours, applying the rules below in strict order.
//!
//! | Order | Condition                                   | Outcome |
//! |-------|---------------------------------------------|---------|
//! | 1     | sentence contains "setlist"                 | match   |
//! | 2     | no token contains "set"                     | no match|
//! | 3     | first such token is not "set"/"sets"        | exclude |
//! | 4     | it is the last token (and rule 7 passes)    | match   |
//! | 5     | next token is "list"                        | match   |
//! | 6     | next token is in `exclude_next`             | exclude |
//! | 7     | previous token is in `exclude_previous`     | exclude |
//! | 8     | otherwise                                   | match   |
//!
//! All comparisons are case-insensitive. Every result carries a [`Reason`]
//! whose `Display` form is a short audit trace.

use crate::rules::RuleTables;
use crate::token::tokenize;
use serde::Serialize;
use std::fmt;

/// Substring used by the pre-filter and to find the trigger token
pub const KEYWORD: &str = "set";

/// The unambiguous compound form
pub const COMPOUND: &str = "setlist";

/// Exact trigger words
pub const TRIGGER_WORDS: &[&str] = &["set", "sets"];

/// Word completing the two-word form "set list"
pub const LIST_WORD: &str = "list";

/// Coarse outcome of a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// A genuine setlist mention
    Match,
    /// A known false-positive pattern
    Excluded,
    /// Nothing to decide on
    NoMatch,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Match => write!(f, "MATCH"),
            Verdict::Excluded => write!(f, "EXCLUDED"),
            Verdict::NoMatch => write!(f, "NO MATCH"),
        }
    }
}

/// The rule that decided a classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Reason {
    /// The pre-filter found no "set" anywhere
    KeywordAbsent,
    /// The sentence contains "setlist"
    Compound,
    /// "set" appears, but never inside a word
    NoTrigger,
    /// The first word containing "set" is a longer word
    Embedded { word: String },
    /// The trigger is the final word of the sentence
    LastWord { word: String },
    /// The trigger is followed by "list"
    SetList { word: String },
    /// The word after the trigger is excluded
    ExcludedNext { word: String, next: String },
    /// The word before the trigger is excluded
    ExcludedPrevious { previous: String, word: String },
    /// No exclusion applied to an ambiguous context
    Default { word: String, next: String },
}

impl Reason {
    /// Coarse outcome implied by this rule
    pub fn verdict(&self) -> Verdict {
        match self {
            Reason::Compound
            | Reason::LastWord { .. }
            | Reason::SetList { .. }
            | Reason::Default { .. } => Verdict::Match,
            Reason::Embedded { .. }
            | Reason::ExcludedNext { .. }
            | Reason::ExcludedPrevious { .. } => Verdict::Excluded,
            Reason::KeywordAbsent | Reason::NoTrigger => Verdict::NoMatch,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::KeywordAbsent => write!(f, "no match: keyword absent"),
            Reason::Compound => write!(f, "matched: setlist"),
            Reason::NoTrigger => write!(f, "no match: no trigger word"),
            Reason::Embedded { word } => write!(f, "excluded: {word}"),
            Reason::LastWord { word } => write!(f, "matched: last word {word}"),
            Reason::SetList { word } => write!(f, "matched: {word} list"),
            Reason::ExcludedNext { word, next } => write!(f, "excluded: {word} {next}"),
            Reason::ExcludedPrevious { previous, word } => {
                write!(f, "excluded: {previous} {word}")
            }
            Reason::Default { word, next } => write!(f, "matched: {word} {next}"),
        }
    }
}

/// Result of classifying one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Whether the sentence is a genuine setlist mention
    pub matched: bool,
    /// Which rule decided
    pub reason: Reason,
}

impl Classification {
    fn from_reason(reason: Reason) -> Self {
        Self {
            matched: reason.verdict() == Verdict::Match,
            reason,
        }
    }

    /// Coarse outcome
    pub fn verdict(&self) -> Verdict {
        self.reason.verdict()
    }

    /// Human-readable audit trace
    pub fn trace(&self) -> String {
        self.reason.to_string()
    }
}

/// Coarse recall stage: does "set" appear anywhere, ignoring case?
///
/// Never rejects a sentence that [`classify`] would match.
pub fn passes_prefilter(sentence: &str) -> bool {
    sentence.to_lowercase().contains(KEYWORD)
}

/// Classify a sentence against the given rule tables
pub fn classify(sentence: &str, rules: &RuleTables) -> Classification {
    let classification = Classification::from_reason(decide(sentence, rules));
    log::debug!("{}: {:?}", classification.reason, sentence);
    classification
}

fn decide(sentence: &str, rules: &RuleTables) -> Reason {
    let lowered = sentence.to_lowercase();
    if !lowered.contains(KEYWORD) {
        return Reason::KeywordAbsent;
    }
    if lowered.contains(COMPOUND) {
        return Reason::Compound;
    }

    let tokens = tokenize(sentence);
    let Some(trigger) = tokens.iter().find(|t| t.lower().contains(KEYWORD)) else {
        return Reason::NoTrigger;
    };

    let word = trigger.lower();
    if !TRIGGER_WORDS.contains(&word.as_str()) {
        return Reason::Embedded { word };
    }

    let excluded_previous = trigger
        .index
        .checked_sub(1)
        .map(|i| tokens[i].lower())
        .filter(|previous| rules.excludes_previous(previous));

    // A sentence-final trigger still honours the previous-word exclusions
    let Some(next) = tokens.get(trigger.index + 1) else {
        return match excluded_previous {
            Some(previous) => Reason::ExcludedPrevious { previous, word },
            None => Reason::LastWord { word },
        };
    };

    let next = next.lower();
    if next == LIST_WORD {
        return Reason::SetList { word };
    }
    if rules.excludes_next(&next) {
        return Reason::ExcludedNext { word, next };
    }
    if let Some(previous) = excluded_previous {
        return Reason::ExcludedPrevious { previous, word };
    }

    Reason::Default { word, next }
}

/// Classifier bound to a fixed set of rule tables
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: RuleTables,
}

impl Classifier {
    /// Create a classifier over the given rules
    pub fn new(rules: RuleTables) -> Self {
        Self { rules }
    }

    /// Classify one sentence
    pub fn classify(&self, sentence: &str) -> Classification {
        classify(sentence, &self.rules)
    }

    /// Convenience: only the boolean decision
    pub fn is_match(&self, sentence: &str) -> bool {
        self.classify(sentence).matched
    }
}
