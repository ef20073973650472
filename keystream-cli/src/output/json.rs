//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use keystream_core::{KeyStream, Token};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs every stream as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    streams: Vec<StreamData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct StreamData {
    /// Where the text came from
    pub source: String,
    /// Milliseconds per duration unit
    pub letter_timing_ms: f64,
    /// Total time an emitter would wait, in milliseconds
    pub total_delay_ms: f64,
    /// The timed tokens
    pub tokens: Vec<Token>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            streams: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_stream(&mut self, source: &str, stream: &KeyStream) -> Result<()> {
        self.streams.push(StreamData {
            source: source.to_string(),
            letter_timing_ms: stream.letter_timing_ms(),
            total_delay_ms: stream.total_delay().as_nanos() as f64 / 1_000_000.0,
            tokens: stream.tokens().to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.streams)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
