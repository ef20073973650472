//! Tokens command implementation

use super::SourceArgs;
use crate::error::CliError;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the tokens command
#[derive(Debug, Args)]
pub struct TokensArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated token per line
    Text,
    /// JSON array with one entry per source
    Json,
    /// Markdown table per source
    Markdown,
}

/// Build the formatter for `format` over `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

impl TokensArgs {
    /// Execute the tokens command
    pub fn execute(&self) -> Result<()> {
        self.source.init_logging();
        log::info!("Starting token dump");
        log::debug!("Arguments: {:?}", self);

        let pipeline = self.source.pipeline()?;
        let sources = self.source.sources()?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file {}", path.display())
            })?)),
            None => Box::new(std::io::stdout()),
        };
        let mut formatter = create_formatter(self.format, writer);

        let mut progress = ProgressReporter::new(self.source.quiet);
        if sources.len() > 1 && self.output.is_some() {
            progress.init_sources(sources.len() as u64);
        }

        for source in &sources {
            let name = source.display_name();
            let text = source.read()?;
            let stream = pipeline
                .make_key_stream(&text)
                .map_err(|e| CliError::ProcessingError(format!("{name}: {e}")))?;

            log::info!("{}: {} tokens", name, stream.len());
            formatter.format_stream(&name, &stream)?;
            progress.source_completed(&name);
        }

        formatter.finish()?;
        progress.finish();

        if let Some(path) = &self.output {
            log::info!("Wrote tokens to {}", path.display());
        }
        Ok(())
    }
}
