//! Entry point for the `setlist` binary

use clap::Parser;
use setlist_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
