//! Text source management for CLI

use crate::input::{resolve_patterns, FileReader};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Where one input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Text given directly on the command line
    Inline(String),
    /// A file resolved from `--input`
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl TextSource {
    /// Get the display name for the text source
    pub fn display_name(&self) -> String {
        match self {
            TextSource::Inline(_) => "<argument>".to_string(),
            TextSource::File(path) => path.display().to_string(),
            TextSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read the full text
    pub fn read(&self) -> Result<String> {
        match self {
            TextSource::Inline(text) => Ok(text.clone()),
            TextSource::File(path) => FileReader::read_text(path),
            TextSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read standard input")?;
                Ok(text)
            }
        }
    }
}

/// Decide which sources a command reads
///
/// Inline text comes first, then files matching `patterns` in sorted
/// order. With neither, standard input is read.
pub fn collect_sources(text: Option<&str>, patterns: &[String]) -> Result<Vec<TextSource>> {
    let mut sources = Vec::new();

    if let Some(text) = text {
        sources.push(TextSource::Inline(text.to_string()));
    }

    if !patterns.is_empty() {
        sources.extend(resolve_patterns(patterns)?.into_iter().map(TextSource::File));
    }

    if sources.is_empty() {
        sources.push(TextSource::Stdin);
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_display_names() {
        assert_eq!(TextSource::Inline("hi".into()).display_name(), "<argument>");
        assert_eq!(TextSource::Stdin.display_name(), "<stdin>");
        assert_eq!(
            TextSource::File(PathBuf::from("notes.txt")).display_name(),
            "notes.txt"
        );
    }

    #[test]
    fn test_inline_read() {
        let source = TextSource::Inline("Hi there.".into());
        assert_eq!(source.read().unwrap(), "Hi there.");
    }

    #[test]
    fn test_no_inputs_means_stdin() {
        assert_eq!(collect_sources(None, &[]).unwrap(), vec![TextSource::Stdin]);
    }

    #[test]
    fn test_inline_then_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "second").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "first").unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let sources = collect_sources(Some("inline"), &[pattern]).unwrap();

        assert_eq!(sources.len(), 3);
        assert_eq!(sources[0], TextSource::Inline("inline".into()));
        assert_eq!(sources[1].read().unwrap(), "first");
        assert_eq!(sources[2].read().unwrap(), "second");
    }

    #[test]
    fn test_unmatched_pattern_is_error() {
        let result = collect_sources(None, &["/nonexistent/*.txt".to_string()]);
        assert!(result.is_err());
    }
}
