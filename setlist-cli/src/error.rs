//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input file matched
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Rule configuration error
    ConfigError(String),
    /// A transcript could not be fetched and the run was aborted
    FetchFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::FetchFailed(msg) => write!(f, "Fetch failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("episode.txt".to_string());
        assert_eq!(error.to_string(), "File not found: episode.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("empty name".to_string());
        assert_eq!(error.to_string(), "Configuration error: empty name");
    }

    #[test]
    fn test_fetch_failed_display() {
        let error = CliError::FetchFailed("document not found: a.txt".to_string());
        assert_eq!(error.to_string(), "Fetch failed: document not found: a.txt");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let failure: anyhow::Result<()> = Err(CliError::ConfigError("bad".to_string()).into());
        let err = failure.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("ファイル/test 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: ファイル/test 文件.txt");
    }
}
