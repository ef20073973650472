//! Type command implementation

use super::SourceArgs;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use keystream_core::{CancellationToken, Scheduler, ThreadScheduler, VirtualScheduler};
use std::io::Write;

/// Arguments for the type command
#[derive(Debug, Args)]
pub struct TypeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write everything at once instead of pacing the output
    #[arg(long)]
    pub no_delay: bool,
}

impl TypeArgs {
    /// Execute the type command
    pub fn execute(&self) -> Result<()> {
        self.source.init_logging();
        log::info!("Starting typewriter output");
        log::debug!("Arguments: {:?}", self);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(&mut out)
    }

    /// Type every source into `writer`
    pub fn run<W: Write>(&self, mut writer: W) -> Result<()> {
        let pipeline = self.source.pipeline()?;
        let sources = self.source.sources()?;

        let mut thread_scheduler = ThreadScheduler;
        let mut virtual_scheduler = VirtualScheduler::new();
        let scheduler: &mut dyn Scheduler = if self.no_delay {
            &mut virtual_scheduler
        } else {
            &mut thread_scheduler
        };

        for source in &sources {
            let name = source.display_name();
            let text = source.read()?;
            let report = pipeline
                .speak_to(&text, &mut writer, &mut *scheduler, CancellationToken::new())
                .map_err(|e| CliError::ProcessingError(format!("{name}: {e}")))?;

            if report.emitted > 0 && !text.ends_with('\n') {
                writeln!(writer)?;
            }
            log::info!(
                "Typed {} ({} keys, {:?} of delays)",
                name,
                report.emitted,
                report.elapsed
            );
        }

        writer.flush()?;
        Ok(())
    }
}
