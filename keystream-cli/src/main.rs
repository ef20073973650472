//! `keystream` command-line entry point

use anyhow::Result;
use clap::Parser;
use keystream_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "keystream")]
#[command(version, about = "Type text out with typewriter timing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
