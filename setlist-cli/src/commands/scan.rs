//! Scan command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, MatchRecord, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use setlist_core::{
    transcript_file_name, unseen_sources, DocumentFetcher, FileFetcher, ScanReport,
    ThrottledFetcher, TranscriptScanner,
};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Transcript files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Rule configuration file (default: built-in rules)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write one file of matches per transcript into this directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip transcripts listed in this file (one path per line)
    #[arg(long, value_name = "FILE")]
    pub skip_listed: Option<PathBuf>,

    /// Fixed delay between transcript fetches, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub delay_ms: u64,

    /// Report excluded candidates and rule traces, not only matches
    #[arg(short, long)]
    pub all: bool,

    /// Abort on the first transcript that cannot be read
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Totals for one scan run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Transcripts scanned
    pub transcripts: usize,
    /// Transcripts that could not be fetched
    pub skipped: usize,
    /// Candidate sentences classified
    pub candidates: usize,
    /// Matching sentences
    pub matches: usize,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting transcript scan");
        log::debug!("Arguments: {:?}", self);

        let config = super::load_config(self.config.as_deref())?;
        let scanner = TranscriptScanner::from_config(&config);
        let sources = self.sources()?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(self.format, writer, self.all);

        let fetcher = ThrottledFetcher::new(FileFetcher::new(), Duration::from_millis(self.delay_ms));
        log::debug!("Delay between transcripts: {:?}", fetcher.delay());
        let summary = self.run(&scanner, &fetcher, &sources, formatter.as_mut())?;
        formatter.finish()?;

        log::info!(
            "Scanned {} transcripts ({} skipped): {} candidates, {} matches",
            summary.transcripts,
            summary.skipped,
            summary.candidates,
            summary.matches
        );
        Ok(())
    }

    /// Resolve inputs and drop any already-processed transcripts
    fn sources(&self) -> Result<Vec<String>> {
        let files = resolve_patterns(&self.input)?;
        let found: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();

        let Some(list) = &self.skip_listed else {
            return Ok(found);
        };
        let known = FileReader::read_list(list)?;
        let unseen = unseen_sources(&found, &known);
        log::info!(
            "Skipping {} already-processed transcripts",
            found.len() - unseen.len()
        );
        Ok(unseen)
    }

    /// Fetch, scan and report every source
    pub fn run<F: DocumentFetcher>(
        &self,
        scanner: &TranscriptScanner,
        fetcher: &F,
        sources: &[String],
        formatter: &mut dyn OutputFormatter,
    ) -> Result<ScanSummary> {
        let mut summary = ScanSummary::default();
        let mut written = HashSet::new();
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        for source in sources {
            let text = match fetcher.fetch(source) {
                Ok(text) => text,
                Err(e) if self.fail_fast => {
                    progress.finish();
                    return Err(CliError::FetchFailed(e.to_string()).into());
                }
                Err(e) => {
                    log::warn!("Skipping {source}: {e}");
                    summary.skipped += 1;
                    progress.file_skipped(source);
                    continue;
                }
            };

            let report = scanner.scan(&text);
            for decision in &report.decisions {
                if self.all || decision.classification.matched {
                    formatter.format_record(&MatchRecord { source, decision })?;
                }
            }

            if let Some(dir) = &self.output_dir {
                write_filtered(dir, source, &report, &mut written)?;
            }

            summary.transcripts += 1;
            summary.candidates += report.candidate_count();
            summary.matches += report.match_count();
            progress.file_completed(source, report.match_count());
        }

        progress.finish();
        Ok(summary)
    }
}

/// Write a transcript's matches to `dir`: its name, then one sentence per line
///
/// `written` holds the file names produced so far in this run; a source
/// whose name is already taken is reported and not written.
fn write_filtered(
    dir: &Path,
    source: &str,
    report: &ScanReport,
    written: &mut HashSet<String>,
) -> Result<()> {
    if report.match_count() == 0 {
        return Ok(());
    }

    let name = transcript_file_name(source);
    if !written.insert(name.clone()) {
        log::warn!("Not writing {source}: {name} was already written in this run");
        return Ok(());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(&name);
    let mut content = format!("{name}\n");
    for decision in report.matches() {
        content.push_str(&decision.sentence);
        content.push('\n');
    }

    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote {} matches to {}", report.match_count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::TextFormatter;
    use setlist_core::FetchError;
    use tempfile::TempDir;

    struct MemoryFetcher;

    impl DocumentFetcher for MemoryFetcher {
        fn fetch(&self, source: &str) -> Result<String, FetchError> {
            match source {
                "good" => Ok("Intro. We played a great set. Then we set up again.".to_string()),
                "flaky" => Err(FetchError::Transient {
                    source_id: source.to_string(),
                    reason: "connection reset".to_string(),
                }),
                other => Err(FetchError::NotFound(other.to_string())),
            }
        }
    }

    fn args(all: bool, fail_fast: bool, output_dir: Option<PathBuf>) -> ScanArgs {
        ScanArgs {
            input: vec!["unused".to_string()],
            output: None,
            format: OutputFormat::Text,
            config: None,
            output_dir,
            skip_listed: None,
            delay_ms: 0,
            all,
            fail_fast,
            quiet: true,
            verbose: 0,
        }
    }

    fn sources(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_skips_failed_fetches() {
        let mut formatter = TextFormatter::new(Vec::new(), false);
        let summary = args(false, false, None)
            .run(
                &TranscriptScanner::default(),
                &MemoryFetcher,
                &sources(&["flaky", "good", "missing"]),
                &mut formatter,
            )
            .unwrap();

        assert_eq!(
            summary,
            ScanSummary {
                transcripts: 1,
                skipped: 2,
                candidates: 2,
                matches: 1,
            }
        );
    }

    #[test]
    fn test_run_fail_fast() {
        let mut formatter = TextFormatter::new(Vec::new(), false);
        let err = args(false, true, None)
            .run(
                &TranscriptScanner::default(),
                &MemoryFetcher,
                &sources(&["good", "flaky"]),
                &mut formatter,
            )
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FetchFailed(_))
        ));
    }

    #[test]
    fn test_write_filtered_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("filtered");
        let mut formatter = TextFormatter::new(Vec::new(), false);

        args(false, false, Some(out.clone()))
            .run(
                &TranscriptScanner::default(),
                &MemoryFetcher,
                &sources(&["good"]),
                &mut formatter,
            )
            .unwrap();

        let written = fs::read_to_string(out.join("good.txt")).unwrap();
        assert_eq!(written, "good.txt\nWe played a great set.\n");
    }

    #[test]
    fn test_no_matches_writes_no_file() {
        let dir = TempDir::new().unwrap();
        let mut written = HashSet::new();
        write_filtered(dir.path(), "quiet.txt", &ScanReport::default(), &mut written).unwrap();
        assert!(!dir.path().join("quiet.txt").exists());
        assert!(written.is_empty());
    }

    #[test]
    fn test_colliding_names_keep_first_transcript() {
        let dir = TempDir::new().unwrap();
        let scanner = TranscriptScanner::default();
        let first = scanner.scan("We played a great set.");
        let second = scanner.scan("Here is the set list.");

        let mut written = HashSet::new();
        write_filtered(dir.path(), "a/Muse.txt", &first, &mut written).unwrap();
        write_filtered(
            dir.path(),
            "b/Song-Exploder-Muse-Transcript.pdf",
            &second,
            &mut written,
        )
        .unwrap();

        let content = fs::read_to_string(dir.path().join("Muse.txt")).unwrap();
        assert_eq!(content, "Muse.txt\nWe played a great set.\n");
        assert_eq!(written.len(), 1);
    }
}
