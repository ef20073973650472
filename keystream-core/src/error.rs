//! Layered error types
//!
//! Pipeline errors are deterministic and terminal for one input string.
//! Configuration and emission errors carry the I/O and parse failures that
//! never happen inside the pure stages.

use crate::token::TokenKind;
use thiserror::Error;

/// Errors raised by the pipeline stages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// A character that is neither a word character nor whitespace
    #[error("unrecognized token {ch:?} at position {position}")]
    UnrecognizedToken {
        /// The offending character
        ch: char,
        /// Zero-based character index in the input
        position: usize,
    },

    /// A trailing punctuation-like character with no punctuation kind
    #[error("unrecognized punctuation {ch:?} at end of word {word:?}")]
    UnrecognizedPunctuation {
        /// The trailing character
        ch: char,
        /// The word it was found on
        word: String,
    },

    /// The timer has no weight for this token kind
    #[error("no timing rule for {kind} tokens")]
    MissingTimingRule {
        /// Kind without a table entry
        kind: TokenKind,
    },
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML could not be parsed into a configuration
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of its allowed range
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// What is wrong with the value
        reason: String,
    },
}

/// Errors raised while building and emitting a key stream
#[derive(Error, Debug)]
pub enum EmitError {
    /// The text was rejected before anything was written
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Writing or flushing the sink failed
    #[error("failed to write key stream: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
