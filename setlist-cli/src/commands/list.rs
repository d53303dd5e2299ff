//! List command implementation

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::Subcommand;
use setlist_core::RulesConfig;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// Print the built-in rule configuration
    Rules,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    fn render(&self) -> Result<String> {
        match self {
            ListCommands::Rules => {
                let config = RulesConfig::embedded().context("Built-in rule configuration is invalid")?;
                toml::to_string_pretty(&config).context("Failed to serialize rule configuration")
            }
            ListCommands::Formats => {
                let mut out = String::from("Available output formats:\n");
                for (name, description) in OutputFormat::descriptions() {
                    out.push_str(&format!("  {name:<10} {description}\n"));
                }
                Ok(out)
            }
        }
    }
}
