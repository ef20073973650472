//! Generate config command implementation

use crate::config::CLI_NEWLINE_WEIGHT;
use anyhow::{Context, Result};
use clap::Args;
use keystream_core::config::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating timing configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the weights to change the typing rhythm");
        println!("2. Validate your configuration:");
        println!("   keystream validate -c {}", self.output.display());
        println!("3. Use it when typing:");
        println!("   keystream type -c {} \"Hello, world.\"", self.output.display());

        Ok(())
    }
}

/// Template matching the built-in CLI profile
fn generate_template() -> String {
    format!(
        r#"# Keystream timing configuration

# Milliseconds per duration unit. Every delay below is multiplied by this.
letter_timing_ms = {letter_timing_ms:.1}

[timing]
# Units spent on a whole syllable, shared evenly by its letters
syllable = {syllable:.1}

# Pause after a space
space = {space:.1}

# Pause after a comma
comma = {comma:.1}

# Pause after a period
period = {period:.1}

# Pause after a line break. Leave unset to get {newline:.1} from the CLI;
# library users without a newline weight get an error on multi-line text.
newline = {newline:.1}

# Syllables longer than the threshold get
# (length - threshold) / divisor extra units.
long_syllable_threshold = {threshold}
long_syllable_divisor = {divisor:.1}
"#,
        letter_timing_ms = defaults::LETTER_TIMING_MS,
        syllable = defaults::SYLLABLE_WEIGHT,
        space = defaults::SPACE_WEIGHT,
        comma = defaults::COMMA_WEIGHT,
        period = defaults::PERIOD_WEIGHT,
        newline = CLI_NEWLINE_WEIGHT,
        threshold = defaults::LONG_SYLLABLE_THRESHOLD,
        divisor = defaults::LONG_SYLLABLE_DIVISOR,
    )
}
