//! Plain text output formatter

use super::{format_duration, OutputFormatter};
use anyhow::Result;
use keystream_core::KeyStream;
use std::io::Write;

/// Plain text formatter - one tab-separated token per line
///
/// Each stream starts with a `# source` header line. Token text is quoted
/// with Rust string escapes so spaces and newlines stay visible.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_stream(&mut self, source: &str, stream: &KeyStream) -> Result<()> {
        writeln!(self.writer, "# {source}")?;
        for token in stream.tokens() {
            writeln!(
                self.writer,
                "{}\t{:?}\t{}",
                token.kind,
                token.text,
                format_duration(token.duration)
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystream_core::KeyStreamPipeline;

    #[test]
    fn test_text_lines() {
        let stream = KeyStreamPipeline::new().make_key_stream("Hi there.").unwrap();
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_stream("<argument>", &stream).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "# <argument>");
        assert_eq!(lines[1], "LETTER\t\"H\"\t2");
        assert_eq!(lines[3], "SPACE\t\" \"\t2");
        assert_eq!(lines[9], "PERIOD\t\".\"\t10");
    }
}
