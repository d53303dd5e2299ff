//! Setlist CLI library
//!
//! This library provides the command-line interface for scanning podcast
//! transcripts for setlist mentions.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use commands::Cli;
pub use error::CliError;
