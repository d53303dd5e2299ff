//! Transcript scanning
//!
//! Ties the splitter and the classifier together: split a transcript into
//! sentences, keep those that pass the pre-filter, and classify each one.

use crate::classifier::{passes_prefilter, Classification, Classifier};
use crate::config::RulesConfig;
use crate::rules::RuleTables;
use crate::splitter::{normalize_whitespace, SentenceSplitter};
use serde::Serialize;

/// One classified candidate sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Whitespace-normalized sentence text
    pub sentence: String,
    /// Position of the sentence within the transcript
    pub index: usize,
    /// The classifier's result
    #[serde(flatten)]
    pub classification: Classification,
}

/// Outcome of scanning one transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Number of sentences the splitter produced
    pub sentences: usize,
    /// Every candidate that passed the pre-filter, in order
    pub decisions: Vec<Decision>,
}

impl ScanReport {
    /// Candidates classified as genuine setlist mentions
    pub fn matches(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(|d| d.classification.matched)
    }

    /// Number of matching sentences
    pub fn match_count(&self) -> usize {
        self.matches().count()
    }

    /// Number of candidates that passed the pre-filter
    pub fn candidate_count(&self) -> usize {
        self.decisions.len()
    }
}

/// Finds setlist mentions in transcript text
#[derive(Debug, Clone, Default)]
pub struct TranscriptScanner {
    splitter: SentenceSplitter,
    classifier: Classifier,
}

impl TranscriptScanner {
    /// Create a scanner from explicit parts
    pub fn new(splitter: SentenceSplitter, rules: RuleTables) -> Self {
        Self {
            splitter,
            classifier: Classifier::new(rules),
        }
    }

    /// Create a scanner from a rule configuration
    pub fn from_config(config: &RulesConfig) -> Self {
        Self::new(config.sentence_splitter(), config.rule_tables())
    }

    /// Sentences containing "set" anywhere, whitespace-normalized
    pub fn extract_candidates(&self, text: &str) -> Vec<String> {
        self.splitter
            .split(text)
            .filter(|s| passes_prefilter(s))
            .map(normalize_whitespace)
            .collect()
    }

    /// Classify every candidate sentence in `text`
    pub fn scan(&self, text: &str) -> ScanReport {
        let mut report = ScanReport::default();

        for (index, raw) in self.splitter.split(text).enumerate() {
            report.sentences += 1;
            if !passes_prefilter(raw) {
                continue;
            }

            let sentence = normalize_whitespace(raw);
            let classification = self.classifier.classify(&sentence);
            if classification.matched {
                log::info!("match: {sentence}");
            }
            report.decisions.push(Decision {
                sentence,
                index,
                classification,
            });
        }

        log::debug!(
            "Scanned {} sentences, {} candidates, {} matches",
            report.sentences,
            report.candidate_count(),
            report.match_count()
        );
        report
    }

    /// Only the matching sentences of `text`
    pub fn process_text(&self, text: &str) -> Vec<String> {
        self.scan(text)
            .decisions
            .into_iter()
            .filter(|d| d.classification.matched)
            .map(|d| d.sentence)
            .collect()
    }
}
