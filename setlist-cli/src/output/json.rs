//! JSON output formatter

use super::{MatchRecord, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs records as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<RecordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordData {
    /// Transcript the sentence came from
    pub source: String,
    /// Sentence position within the transcript
    pub index: usize,
    /// The sentence text
    pub sentence: String,
    /// Whether the sentence is a setlist mention
    pub matched: bool,
    /// Audit trace of the deciding rule
    pub reason: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &MatchRecord<'_>) -> Result<()> {
        let decision = record.decision;
        self.records.push(RecordData {
            source: record.source.to_string(),
            index: decision.index,
            sentence: decision.sentence.clone(),
            matched: decision.classification.matched,
            reason: decision.classification.trace(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setlist_core::TranscriptScanner;

    #[test]
    fn test_json_array() {
        let report = TranscriptScanner::default().scan("Intro. Here is the set list.");
        let mut formatter = JsonFormatter::new(Vec::new());
        for decision in report.matches() {
            formatter
                .format_record(&MatchRecord {
                    source: "ep.txt",
                    decision,
                })
                .unwrap();
        }
        formatter.finish().unwrap();

        let parsed: Vec<RecordData> = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].source, "ep.txt");
        assert_eq!(parsed[0].index, 1);
        assert_eq!(parsed[0].sentence, "Here is the set list.");
        assert!(parsed[0].matched);
        assert_eq!(parsed[0].reason, "matched: set list");
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
