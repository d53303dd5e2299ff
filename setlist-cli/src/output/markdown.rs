//! Markdown output formatter

use super::{MatchRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs sentences as a list per transcript
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    with_trace: bool,
    current_source: Option<String>,
    item_count: usize,
    total: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, with_trace: bool) -> Self {
        Self {
            writer,
            with_trace,
            current_source: None,
            item_count: 0,
            total: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &MatchRecord<'_>) -> Result<()> {
        if self.current_source.as_deref() != Some(record.source) {
            if self.current_source.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {}", record.source)?;
            writeln!(self.writer)?;
            self.current_source = Some(record.source.to_string());
            self.item_count = 0;
        }

        self.item_count += 1;
        self.total += 1;
        let decision = record.decision;
        if self.with_trace {
            writeln!(
                self.writer,
                "{}. {} *({})*",
                self.item_count, decision.sentence, decision.classification.reason
            )?;
        } else {
            writeln!(self.writer, "{}. {}", self.item_count, decision.sentence)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.total)?;
        self.writer.flush()?;
        Ok(())
    }
}
