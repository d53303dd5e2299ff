//! Plain text output formatter

use super::{MatchRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
    with_trace: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, with_trace: bool) -> Self {
        Self { writer, with_trace }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &MatchRecord<'_>) -> Result<()> {
        let decision = record.decision;
        if self.with_trace {
            writeln!(
                self.writer,
                "{}\t{}\t{}",
                decision.classification.verdict(),
                decision.classification.reason,
                decision.sentence
            )?;
        } else {
            writeln!(self.writer, "{}", decision.sentence)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
