//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Name recorded in the new configuration
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating rule configuration template...");
        println!("  Name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the exclusion lists to suit your transcripts");
        println!("2. Validate your configuration:");
        println!("   setlist validate --config {}", self.output.display());
        println!("3. Use it for scanning:");
        println!(
            "   setlist scan -i 'transcripts/*.txt' --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let name = self.name.replace('\\', "\\\\").replace('"', "\\\"");
        format!(
            r#"# Rule configuration for setlist-mention detection

[metadata]
name = "{name}"
description = "Custom exclusion rules"

[rules]
# A single word directly before "set" that turns it into a compound noun.
# "drum set" and "box set" are not setlists.
exclude_previous = ["box", "drum", "skill", "sun"]

# A single word directly after "set" that signals an unrelated sense.
# "set up" and "set it" are not setlists.
exclude_next = ["against", "her", "him", "in", "it", "of", "off", "out", "up", "the"]

[splitter]
# Characters that may end a sentence
terminators = [".", "?"]

# Words whose trailing period never ends a sentence.
# Two-letter titles ("Mr", "Dr"), single initials and dotted forms ("U.S.")
# are recognized without being listed.
abbreviations = ["Mrs", "Prof", "Jr", "Sr", "vs"]
"#
        )
    }
}
