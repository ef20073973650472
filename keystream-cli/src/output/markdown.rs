//! Markdown output formatter

use super::{format_duration, OutputFormatter};
use anyhow::Result;
use keystream_core::KeyStream;
use std::io::Write;

/// Markdown formatter - outputs each stream as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    token_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            token_count: 0,
        }
    }
}

/// Escape text for a table cell
fn cell(text: &str) -> String {
    match text {
        " " => "␠".to_string(),
        "\n" => "↵".to_string(),
        "\t" => "⇥".to_string(),
        "|" => "\\|".to_string(),
        other => format!("`{other}`"),
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_stream(&mut self, source: &str, stream: &KeyStream) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | kind | text | duration |")?;
        writeln!(self.writer, "|---|------|------|----------|")?;
        for (index, token) in stream.tokens().iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                index + 1,
                token.kind,
                cell(&token.text),
                format_duration(token.duration)
            )?;
        }
        writeln!(self.writer)?;
        self.token_count += stream.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total tokens: {}*", self.token_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
