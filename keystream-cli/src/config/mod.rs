//! Configuration module
//!
//! The CLI reads the same TOML schema as the core [`PipelineConfig`]. Text
//! files are full of line breaks, so the CLI profile times a newline like a
//! period whenever the configuration leaves it unset.

use crate::error::CliError;
use anyhow::Result;
use keystream_core::config::defaults;
use keystream_core::{PipelineConfig, TokenKind};
use std::path::Path;

/// Newline weight applied when a configuration does not set one
pub const CLI_NEWLINE_WEIGHT: f64 = defaults::PERIOD_WEIGHT;

/// Built-in CLI profile: core defaults plus a newline weight
pub fn builtin_profile() -> PipelineConfig {
    with_cli_defaults(PipelineConfig::default())
}

/// Fill in the CLI-only defaults
pub fn with_cli_defaults(mut config: PipelineConfig) -> PipelineConfig {
    if config.timing.newline.is_none() {
        config.timing = config.timing.with_weight(TokenKind::Newline, CLI_NEWLINE_WEIGHT);
    }
    config
}

/// Load the configuration for a run
///
/// `path` overrides the built-in profile; `scale` overrides
/// `letter_timing_ms` from either source.
pub fn load_config(path: Option<&Path>, scale: Option<f64>) -> Result<PipelineConfig> {
    let mut config = match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            let loaded = PipelineConfig::from_file(path).map_err(|e| {
                CliError::ConfigError(format!("{}: {e}", path.display()))
            })?;
            with_cli_defaults(loaded)
        }
        None => builtin_profile(),
    };

    if let Some(scale) = scale {
        config.letter_timing_ms = scale;
    }
    config
        .validate()
        .map_err(|e| CliError::ConfigError(e.to_string()))?;

    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}
