//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use setlist_core::RulesConfig;
use std::path::Path;

pub mod classify;
pub mod generate_config;
pub mod list;
pub mod scan;
pub mod validate;

/// Find setlist mentions in podcast transcripts
#[derive(Debug, Parser)]
#[command(name = "setlist", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan transcript files for setlist mentions
    Scan(scan::ScanArgs),

    /// Classify individual sentences and show which rule fired
    Classify(classify::ClassifyArgs),

    /// Validate a rule configuration file
    Validate(validate::ValidateArgs),

    /// Generate a rule configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Scan(args) => args.execute(),
            Commands::Classify(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Load rules from `path`, or the built-in configuration
pub(crate) fn load_config(path: Option<&Path>) -> Result<RulesConfig> {
    match path {
        Some(path) => RulesConfig::from_file(path, None)
            .with_context(|| format!("Failed to load rule configuration: {}", path.display())),
        None => RulesConfig::embedded().context("Built-in rule configuration is invalid"),
    }
}
