//! Output formatting module

use anyhow::Result;
use keystream_core::KeyStream;

/// Trait for key stream dump formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the key stream built from one source
    fn format_stream(&mut self, source: &str, stream: &KeyStream) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Render an optional duration for tabular output
pub(crate) fn format_duration(duration: Option<f64>) -> String {
    match duration {
        Some(duration) => format!("{duration}"),
        None => "-".to_string(),
    }
}
