//! Pipeline configuration
//!
//! The timing table is an immutable value handed to the default timer at
//! construction. Both types deserialize from TOML with every field
//! defaulted, so a config file only needs the values it changes:
//!
//! ```toml
//! letter_timing_ms = 80.0
//!
//! [timing]
//! newline = 12.0
//! ```

use crate::error::ConfigError;
use crate::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Milliseconds per duration unit
    pub const LETTER_TIMING_MS: f64 = 100.0;

    /// Base weight of a syllable
    pub const SYLLABLE_WEIGHT: f64 = 4.0;

    /// Weight of a collapsed whitespace run
    pub const SPACE_WEIGHT: f64 = 2.0;

    /// Weight of a trailing comma
    pub const COMMA_WEIGHT: f64 = 5.0;

    /// Weight of a trailing period
    pub const PERIOD_WEIGHT: f64 = 10.0;

    /// Syllables longer than this many characters get a length penalty
    pub const LONG_SYLLABLE_THRESHOLD: usize = 5;

    /// Each extra character adds `1 / divisor` units
    pub const LONG_SYLLABLE_DIVISOR: f64 = 2.0;
}

/// Weight per token kind plus the syllable length penalty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllable: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<f64>,
    /// No default entry: newlines fail timing unless configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newline: Option<f64>,
    /// Only read for LETTER tokens a custom syllabizer emits itself; the
    /// letterizer splits syllable time and never consults it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<f64>,
    pub long_syllable_threshold: usize,
    pub long_syllable_divisor: f64,
}

impl Default for TimingTable {
    fn default() -> Self {
        Self {
            syllable: Some(defaults::SYLLABLE_WEIGHT),
            space: Some(defaults::SPACE_WEIGHT),
            comma: Some(defaults::COMMA_WEIGHT),
            period: Some(defaults::PERIOD_WEIGHT),
            newline: None,
            letter: None,
            long_syllable_threshold: defaults::LONG_SYLLABLE_THRESHOLD,
            long_syllable_divisor: defaults::LONG_SYLLABLE_DIVISOR,
        }
    }
}

impl TimingTable {
    /// Base weight for `kind`, if the table has one
    pub fn weight(&self, kind: TokenKind) -> Option<f64> {
        match kind {
            TokenKind::Syllable => self.syllable,
            TokenKind::Space => self.space,
            TokenKind::Comma => self.comma,
            TokenKind::Period => self.period,
            TokenKind::Newline => self.newline,
            TokenKind::Letter => self.letter,
            TokenKind::Word => None,
        }
    }

    /// Return a copy with `kind` weighted at `weight`
    ///
    /// Words are never timed, so setting a word weight is a no-op.
    pub fn with_weight(mut self, kind: TokenKind, weight: f64) -> Self {
        let slot = match kind {
            TokenKind::Syllable => &mut self.syllable,
            TokenKind::Space => &mut self.space,
            TokenKind::Comma => &mut self.comma,
            TokenKind::Period => &mut self.period,
            TokenKind::Newline => &mut self.newline,
            TokenKind::Letter => &mut self.letter,
            TokenKind::Word => return self,
        };
        *slot = Some(weight);
        self
    }

    /// Extra units for a syllable of `len` characters
    pub fn length_penalty(&self, len: usize) -> f64 {
        if len > self.long_syllable_threshold {
            (len - self.long_syllable_threshold) as f64 / self.long_syllable_divisor
        } else {
            0.0
        }
    }

    /// Check that every weight is a finite non-negative number
    pub fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("syllable", self.syllable),
            ("space", self.space),
            ("comma", self.comma),
            ("period", self.period),
            ("newline", self.newline),
            ("letter", self.letter),
        ];

        for (name, weight) in entries {
            if let Some(weight) = weight {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(ConfigError::Invalid {
                        reason: format!(
                            "timing.{name} must be a non-negative number, got {weight}"
                        ),
                    });
                }
            }
        }

        if !self.long_syllable_divisor.is_finite() || self.long_syllable_divisor <= 0.0 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "timing.long_syllable_divisor must be greater than 0, got {}",
                    self.long_syllable_divisor
                ),
            });
        }

        Ok(())
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Milliseconds per duration unit when emitting
    pub letter_timing_ms: f64,
    /// Weights used by the default timer
    pub timing: TimingTable,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            letter_timing_ms: defaults::LETTER_TIMING_MS,
            timing: TimingTable::default(),
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.letter_timing_ms.is_finite() || self.letter_timing_ms <= 0.0 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "letter_timing_ms must be greater than 0, got {}",
                    self.letter_timing_ms
                ),
            });
        }

        self.timing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_table_matches_reference_weights() {
        let table = TimingTable::default();
        assert_eq!(table.weight(TokenKind::Syllable), Some(4.0));
        assert_eq!(table.weight(TokenKind::Space), Some(2.0));
        assert_eq!(table.weight(TokenKind::Comma), Some(5.0));
        assert_eq!(table.weight(TokenKind::Period), Some(10.0));
        assert_eq!(table.weight(TokenKind::Newline), None);
        assert_eq!(table.weight(TokenKind::Letter), None);
        assert_eq!(table.weight(TokenKind::Word), None);
    }

    #[test]
    fn test_length_penalty() {
        let table = TimingTable::default();
        assert_eq!(table.length_penalty(0), 0.0);
        assert_eq!(table.length_penalty(5), 0.0);
        assert_eq!(table.length_penalty(6), 0.5);
        assert_eq!(table.length_penalty(9), 2.0);
    }

    #[test]
    fn test_with_weight() {
        let table = TimingTable::default().with_weight(TokenKind::Newline, 10.0);
        assert_eq!(table.weight(TokenKind::Newline), Some(10.0));

        let unchanged = TimingTable::default().with_weight(TokenKind::Word, 1.0);
        assert_eq!(unchanged, TimingTable::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PipelineConfig::from_toml_str(
            r#"
letter_timing_ms = 50.0

[timing]
newline = 12.0
"#,
        )
        .unwrap();

        assert_eq!(config.letter_timing_ms, 50.0);
        assert_eq!(config.timing.newline, Some(12.0));
        assert_eq!(config.timing.syllable, Some(4.0));
        assert_eq!(config.timing.long_syllable_threshold, 5);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_validate_rejects_non_positive_letter_timing() {
        let config = PipelineConfig {
            letter_timing_ms: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let result = PipelineConfig::from_toml_str("[timing]\nspace = -1.0\n");
        match result {
            Err(ConfigError::Invalid { reason }) => assert!(reason.contains("timing.space")),
            other => panic!("Expected Invalid error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_divisor() {
        let result = PipelineConfig::from_toml_str("[timing]\nlong_syllable_divisor = 0.0\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_malformed_toml() {
        let result = PipelineConfig::from_toml_str("letter_timing_ms = \"fast\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "letter_timing_ms = 25.0").unwrap();

        let config = PipelineConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.letter_timing_ms, 25.0);
    }

    #[test]
    fn test_from_missing_file() {
        let result = PipelineConfig::from_file("/nonexistent/keystream.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_serialize_round_trip_through_toml() {
        let config = PipelineConfig {
            letter_timing_ms: 75.0,
            timing: TimingTable::default().with_weight(TokenKind::Newline, 10.0),
        };
        let rendered = toml::to_string(&config).unwrap();
        assert!(rendered.contains("newline = 10.0"));
        assert_eq!(PipelineConfig::from_toml_str(&rendered).unwrap(), config);
    }
}
