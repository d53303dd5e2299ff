//! Layered error types
//!
//! The classifier itself is total and never fails. Errors only arise at the
//! edges: loading rule configuration, fetching transcripts, and assembling
//! tabular output.

use std::path::PathBuf;
use thiserror::Error;

/// Rule configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The TOML could not be parsed into the configuration schema
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but violates a constraint
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Document fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// A failure that may succeed if attempted again later
    #[error("transient failure fetching {source_id}: {reason}")]
    Transient {
        /// The identifier that was requested
        source_id: String,
        /// Why the fetch failed
        reason: String,
    },

    /// The requested document does not exist
    #[error("document not found: {0}")]
    NotFound(String),

    /// The document was retrieved but could not be decoded as text
    #[error("could not decode {source_id}: {reason}")]
    Decode {
        /// The identifier that was requested
        source_id: String,
        /// Why decoding failed
        reason: String,
    },
}

impl FetchError {
    /// Whether the caller may reasonably try again
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Transient { .. })
    }
}

/// Tabular output errors
#[derive(Error, Debug)]
pub enum TableError {
    /// A column does not have the same number of rows as the others
    #[error("column '{column}' has {actual} values, expected {expected}")]
    MisalignedColumn {
        /// Name of the offending column
        column: String,
        /// Row count of the existing columns
        expected: usize,
        /// Row count of the offending column
        actual: usize,
    },

    /// A column with this name already exists
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    /// Writing the table failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for the crate
#[derive(Error, Debug)]
pub enum SetlistError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Table error
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, SetlistError>;
