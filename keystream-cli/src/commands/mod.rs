//! CLI command implementations

use crate::config::load_config;
use crate::text_source::{collect_sources, TextSource};
use anyhow::Result;
use clap::{Args, Subcommand};
use keystream_core::KeyStreamPipeline;
use std::path::PathBuf;

pub mod generate_config;
pub mod tokens;
pub mod type_text;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Type text to the terminal with typewriter timing
    Type(type_text::TypeArgs),

    /// Dump the timed token stream
    Tokens(tokens::TokensArgs),

    /// Generate a commented timing configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a timing configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Type(args) => args.execute(),
            Commands::Tokens(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Input, configuration and verbosity options shared by `type` and `tokens`
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Text to process (stdin is read when neither TEXT nor --input is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Timing configuration file
    #[arg(short, long, value_name = "FILE", env = "KEYSTREAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Milliseconds per duration unit (overrides the configuration)
    #[arg(long, value_name = "MS")]
    pub scale: Option<f64>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SourceArgs {
    /// Resolve the text sources to read
    pub fn sources(&self) -> Result<Vec<TextSource>> {
        collect_sources(self.text.as_deref(), &self.input)
    }

    /// Build the pipeline from the effective configuration
    pub fn pipeline(&self) -> Result<KeyStreamPipeline> {
        let config = load_config(self.config.as_deref(), self.scale)?;
        let pipeline = KeyStreamPipeline::with_config(config)?;
        log::debug!("Using pipeline {:?}", pipeline);
        Ok(pipeline)
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        init_logging(self.verbose, self.quiet);
    }
}

/// Install the `env_logger` backend
///
/// `RUST_LOG` takes precedence over the `-v` count. A logger installed
/// earlier in the process is kept.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
