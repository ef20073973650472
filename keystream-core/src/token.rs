//! Token model shared by every pipeline stage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag carried by every token
///
/// `Word` and `Syllable` only exist between stages; a finished key stream
/// holds `Letter`, `Space`, `Newline`, `Period` and `Comma` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    /// A run of word characters
    Word,
    /// A collapsed run of non-newline whitespace
    Space,
    /// A single `\n`
    Newline,
    /// A sub-word unit produced by a syllabizer
    Syllable,
    /// A trailing `.`
    Period,
    /// A trailing `,`
    Comma,
    /// One character of a syllable
    Letter,
}

impl TokenKind {
    /// Upper-case name used in dumps and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::Space => "SPACE",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Syllable => "SYLLABLE",
            TokenKind::Period => "PERIOD",
            TokenKind::Comma => "COMMA",
            TokenKind::Letter => "LETTER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(kind, text, duration?)` record
///
/// `duration` is set by the timer stage. For letters it is the share of the
/// parent syllable's duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Kind tag
    pub kind: TokenKind,
    /// Literal text this token stands for
    pub text: String,
    /// Abstract time cost, present once timed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Token {
    /// Create an untimed token
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            duration: None,
        }
    }

    /// Create a timed token
    pub fn timed(kind: TokenKind, text: impl Into<String>, duration: f64) -> Self {
        Self {
            kind,
            text: text.into(),
            duration: Some(duration),
        }
    }

    pub fn word(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Word, text)
    }

    pub fn space(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Space, text)
    }

    pub fn newline() -> Self {
        Self::new(TokenKind::Newline, "\n")
    }

    pub fn syllable(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Syllable, text)
    }

    pub fn period() -> Self {
        Self::new(TokenKind::Period, ".")
    }

    pub fn comma() -> Self {
        Self::new(TokenKind::Comma, ",")
    }

    pub fn letter(ch: char, duration: f64) -> Self {
        Self::timed(TokenKind::Letter, ch, duration)
    }

    /// Return a copy of this token carrying `duration`
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Whether the timer stage has run over this token
    pub fn is_timed(&self) -> bool {
        self.duration.is_some()
    }

    /// Text length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Concatenate the text of every token in order
pub fn concat_text(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
