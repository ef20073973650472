//! Validate command implementation

use crate::config::with_cli_defaults;
use anyhow::Result;
use clap::Args;
use keystream_core::{ConfigError, PipelineConfig, TokenKind};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to timing configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating timing configuration: {}", self.config.display());

        match self.load() {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Letter timing: {} ms per unit", config.letter_timing_ms);
                for kind in [
                    TokenKind::Syllable,
                    TokenKind::Space,
                    TokenKind::Comma,
                    TokenKind::Period,
                    TokenKind::Newline,
                ] {
                    match config.timing.weight(kind) {
                        Some(weight) => println!("  {kind}: {weight}"),
                        None => println!("  {kind}: unset"),
                    }
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }

    /// Load the file and apply the CLI defaults `type` and `tokens` would use
    pub fn load(&self) -> Result<PipelineConfig, ConfigError> {
        PipelineConfig::from_file(&self.config).map(with_cli_defaults)
    }
}
