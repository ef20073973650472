//! Keystream CLI library
//!
//! This library provides the command-line interface for the Keystream
//! typewriter pipeline.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod text_source;

pub use error::{CliError, CliResult};
