//! Classify command implementation

use anyhow::{Context, Result};
use clap::Args;
use setlist_core::{Classification, Classifier};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Sentences to classify (default: one per line from stdin)
    #[arg(value_name = "SENTENCE")]
    pub sentences: Vec<String>,

    /// Rule configuration file (default: built-in rules)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print one JSON object per sentence
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let config = super::load_config(self.config.as_deref())?;
        let classifier = Classifier::new(config.rule_tables());

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if !self.sentences.is_empty() {
            for sentence in &self.sentences {
                self.write_line(&mut out, sentence, &classifier.classify(sentence))?;
            }
        } else {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read from stdin")?;
                if line.trim().is_empty() {
                    continue;
                }
                self.write_line(&mut out, &line, &classifier.classify(&line))?;
            }
        }

        out.flush()?;
        Ok(())
    }

    fn write_line<W: Write>(
        &self,
        out: &mut W,
        sentence: &str,
        result: &Classification,
    ) -> Result<()> {
        if self.json {
            let line = serde_json::json!({
                "sentence": sentence,
                "verdict": result.verdict().to_string(),
                "trace": result.trace(),
                "matched": result.matched,
                "reason": result.reason,
            });
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "{}\t{}\t{}", result.verdict(), result.trace(), sentence)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(json: bool) -> ClassifyArgs {
        ClassifyArgs {
            sentences: Vec::new(),
            config: None,
            json,
            verbose: 0,
        }
    }

    fn render(args: &ClassifyArgs, sentence: &str) -> String {
        let classifier = Classifier::default();
        let mut out = Vec::new();
        args.write_line(&mut out, sentence, &classifier.classify(sentence))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tab_separated_line() {
        assert_eq!(
            render(&args(false), "She brought her drum set."),
            "EXCLUDED\texcluded: drum set\tShe brought her drum set.\n"
        );
        assert_eq!(
            render(&args(false), "Nothing to see."),
            "NO MATCH\tno match: keyword absent\tNothing to see.\n"
        );
    }

    #[test]
    fn test_json_line() {
        let line = render(&args(true), "Here is the set list.");
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["verdict"], "MATCH");
        assert_eq!(value["trace"], "matched: set list");
        assert_eq!(value["reason"]["rule"], "set_list");
    }
}
