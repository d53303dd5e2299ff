//! Document fetching
//!
//! Transcripts come from somewhere else: a local archive, a web page, a
//! PDF service. This module only defines the seam. Callers decide whether
//! a failed fetch is skipped or aborts the run; failures never reach the
//! classifier.

use crate::error::FetchError;
use std::cell::Cell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Retrieves the text of a document by identifier
pub trait DocumentFetcher {
    /// Fetch the document text; may fail transiently
    fn fetch(&self, source: &str) -> Result<String, FetchError>;
}

/// Reads transcripts from the local filesystem
///
/// Relative identifiers are resolved against `root` when one is set.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    root: Option<PathBuf>,
}

impl FileFetcher {
    /// Resolve identifiers as given
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative identifiers against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, source: &str) -> PathBuf {
        match &self.root {
            Some(root) if Path::new(source).is_relative() => root.join(source),
            _ => PathBuf::from(source),
        }
    }
}

impl DocumentFetcher for FileFetcher {
    fn fetch(&self, source: &str) -> Result<String, FetchError> {
        let path = self.resolve(source);
        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FetchError::NotFound(path.display().to_string()),
            _ => FetchError::Transient {
                source_id: source.to_string(),
                reason: e.to_string(),
            },
        })?;

        String::from_utf8(bytes).map_err(|e| FetchError::Decode {
            source_id: source.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Enforces a fixed minimum delay between consecutive fetches
///
/// There is no retry and no backoff: each fetch is attempted once.
#[derive(Debug)]
pub struct ThrottledFetcher<F> {
    inner: F,
    delay: Duration,
    last: Cell<Option<Instant>>,
}

impl<F: DocumentFetcher> ThrottledFetcher<F> {
    /// Wrap `inner`, waiting at least `delay` between fetches
    pub fn new(inner: F, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            last: Cell::new(None),
        }
    }

    /// The configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<F: DocumentFetcher> DocumentFetcher for ThrottledFetcher<F> {
    fn fetch(&self, source: &str) -> Result<String, FetchError> {
        if let Some(last) = self.last.get() {
            let elapsed = last.elapsed();
            if elapsed < self.delay {
                let wait = self.delay - elapsed;
                log::trace!("Throttling {source} for {wait:?}");
                std::thread::sleep(wait);
            }
        }
        let result = self.inner.fetch(source);
        self.last.set(Some(Instant::now()));
        result
    }
}

impl<F: DocumentFetcher + ?Sized> DocumentFetcher for &F {
    fn fetch(&self, source: &str) -> Result<String, FetchError> {
        (**self).fetch(source)
    }
}

const USUAL_PREFIX: &str = "Song-Exploder-";
const USUAL_SUFFIX: &str = "-Transcript";

/// Map a transcript URL or path to a succinct `.txt` file name
///
/// `https://host/files/Song-Exploder-Muse-Transcript.pdf` becomes
/// `Muse.txt`.
pub fn transcript_file_name(source: &str) -> String {
    let last = source
        .trim_end_matches('/')
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(source);
    let mut name = match last.rfind('.') {
        Some(dot) if dot > 0 => &last[..dot],
        _ => last,
    };

    if name.len() >= USUAL_SUFFIX.len()
        && name.is_char_boundary(name.len() - USUAL_SUFFIX.len())
        && name[name.len() - USUAL_SUFFIX.len()..].eq_ignore_ascii_case(USUAL_SUFFIX)
    {
        name = &name[..name.len() - USUAL_SUFFIX.len()];
    }
    if let Some(stripped) = name.strip_prefix(USUAL_PREFIX) {
        name = stripped;
    }

    format!("{name}.txt")
}

/// Sources in `found` that are not in `known`, first occurrence order
pub fn unseen_sources<S: AsRef<str>>(found: &[S], known: &[S]) -> Vec<String> {
    let known: HashSet<&str> = known.iter().map(|s| s.as_ref()).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    found
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !known.contains(s) && seen.insert(*s))
        .map(str::to_string)
        .collect()
}
