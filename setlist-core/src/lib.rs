//! Setlist-mention detection for podcast transcripts
//!
//! Interview transcripts mention "set" constantly, but only some of those
//! mentions are about the songs a band played. This crate splits transcript
//! text into sentences, keeps the ones containing "set", and classifies each
//! with a small, auditable rule cascade.
//!
//! # Architecture
//!
//! - [`token`]: maximal-letter-run tokenizer
//! - [`rules`]: immutable exclusion tables
//! - [`classifier`]: the decision cascade and its audit trace
//! - [`splitter`]: abbreviation-aware sentence splitting
//! - [`scanner`]: transcript-level orchestration
//! - [`fetch`], [`table`]: collaborator seams for input and output
//! - [`config`]: TOML rule configuration
//!
//! # Example
//!
//! ```rust
//! use setlist_core::{classify, RuleTables, TranscriptScanner};
//!
//! let rules = RuleTables::default();
//! let result = classify("Here is the set list for tonight.", &rules);
//! assert!(result.matched);
//! assert_eq!(result.trace(), "matched: set list");
//!
//! let scanner = TranscriptScanner::default();
//! let matches = scanner.process_text("We set up early. Then we played a long set.");
//! assert_eq!(matches, vec!["Then we played a long set."]);
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod fetch;
pub mod rules;
pub mod scanner;
pub mod splitter;
pub mod table;
pub mod token;

pub use classifier::{classify, passes_prefilter, Classification, Classifier, Reason, Verdict};
pub use config::RulesConfig;
pub use error::{ConfigError, FetchError, Result, SetlistError, TableError};
pub use fetch::{transcript_file_name, unseen_sources, DocumentFetcher, FileFetcher, ThrottledFetcher};
pub use rules::RuleTables;
pub use scanner::{Decision, ScanReport, TranscriptScanner};
pub use splitter::{normalize_whitespace, SentenceSplitter, Sentences};
pub use table::Table;
pub use token::{tokenize, Token};
