//! Output formatting module

use anyhow::Result;
use setlist_core::Decision;
use std::io::Write;

/// One classified sentence, tagged with the transcript it came from
#[derive(Debug, Clone, Copy)]
pub struct MatchRecord<'a> {
    /// Transcript identifier
    pub source: &'a str,
    /// The classified sentence
    pub decision: &'a Decision,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single record
    fn format_record(&mut self, record: &MatchRecord<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod delimited;
pub mod json;
pub mod markdown;
pub mod text;

pub use delimited::DelimitedFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with source and reason
    Json,
    /// Markdown list grouped by transcript
    Markdown,
    /// Comma-separated table
    Csv,
}

impl OutputFormat {
    /// All formats with a short description
    pub fn descriptions() -> &'static [(&'static str, &'static str)] {
        &[
            ("text", "One sentence per line"),
            ("json", "JSON array with source, sentence and reason"),
            ("markdown", "Numbered list grouped by transcript"),
            ("csv", "Comma-separated table with a header row"),
        ]
    }
}

/// Build the formatter for `format` over `writer`
///
/// `with_trace` adds the verdict and audit trace to formats that would
/// otherwise print only the sentence.
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    with_trace: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, with_trace)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, with_trace)),
        OutputFormat::Csv => Box::new(DelimitedFormatter::new(writer, ',')),
    }
}
