//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use setlist_core::{RulesConfig, SentenceSplitter};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to rule configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule configuration: {}", self.config.display());

        match RulesConfig::from_file(&self.config, None) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Name: {}", config.metadata.name);
                if let Some(description) = &config.metadata.description {
                    println!("  Description: {description}");
                }
                println!(
                    "  Previous-word exclusions: {}",
                    config.rules.exclude_previous.len()
                );
                println!("  Next-word exclusions: {}", config.rules.exclude_next.len());
                print!("{}", splitter_summary(&config.sentence_splitter()));
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(e.to_string()).into())
            }
        }
    }
}

/// Terminators and abbreviations the splitter will actually use
fn splitter_summary(splitter: &SentenceSplitter) -> String {
    let terminators: String = splitter.terminators().iter().collect();
    let abbreviations: Vec<&str> = splitter.abbreviations().collect();
    format!(
        "  Terminators: {terminators}\n  Abbreviations: {}\n",
        abbreviations.join(", ")
    )
}
