//! Delimited (CSV-style) output formatter

use super::{MatchRecord, OutputFormatter};
use anyhow::Result;
use setlist_core::Table;
use std::io::Write;

/// Delimited formatter - buffers columns and writes a table on finish
pub struct DelimitedFormatter<W: Write> {
    writer: W,
    delimiter: char,
    sources: Vec<String>,
    sentences: Vec<String>,
    verdicts: Vec<String>,
    reasons: Vec<String>,
}

impl<W: Write> DelimitedFormatter<W> {
    /// Create a new delimited formatter
    pub fn new(writer: W, delimiter: char) -> Self {
        Self {
            writer,
            delimiter,
            sources: Vec::new(),
            sentences: Vec::new(),
            verdicts: Vec::new(),
            reasons: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for DelimitedFormatter<W> {
    fn format_record(&mut self, record: &MatchRecord<'_>) -> Result<()> {
        let classification = &record.decision.classification;
        self.sources.push(record.source.to_string());
        self.sentences.push(record.decision.sentence.clone());
        self.verdicts.push(classification.verdict().to_string());
        self.reasons.push(classification.trace());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let mut table = Table::new();
        table.push_column("source", std::mem::take(&mut self.sources))?;
        table.push_column("sentence", std::mem::take(&mut self.sentences))?;
        table.push_column("verdict", std::mem::take(&mut self.verdicts))?;
        table.push_column("reason", std::mem::take(&mut self.reasons))?;
        table.write_delimited(&mut self.writer, self.delimiter)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setlist_core::TranscriptScanner;

    #[test]
    fn test_csv_table() {
        let report = TranscriptScanner::default().scan("Drum set, anyone? A great set.");
        let mut formatter = DelimitedFormatter::new(Vec::new(), ',');
        for decision in &report.decisions {
            formatter
                .format_record(&MatchRecord {
                    source: "ep.txt",
                    decision,
                })
                .unwrap();
        }
        formatter.finish().unwrap();

        assert_eq!(
            String::from_utf8(formatter.writer).unwrap(),
            "source,sentence,verdict,reason\n\
             ep.txt,\"Drum set, anyone?\",EXCLUDED,excluded: drum set\n\
             ep.txt,A great set.,MATCH,matched: last word set\n"
        );
    }
}
