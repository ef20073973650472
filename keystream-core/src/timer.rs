//! Timer strategy for assigning durations to tokens

use crate::config::TimingTable;
use crate::error::{PipelineError, Result};
use crate::token::{Token, TokenKind};

/// Pluggable strategy that assigns a non-negative duration to a token
pub trait Timer: Send + Sync {
    /// Duration of `token` in abstract units
    fn time(&self, token: &Token) -> Result<f64>;

    /// Get a human-readable name for this strategy
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Default strategy: table lookup by kind plus a long-syllable penalty
///
/// Kinds missing from the table fail with
/// [`PipelineError::MissingTimingRule`] instead of timing as zero.
#[derive(Debug, Clone, Default)]
pub struct TableTimer {
    table: TimingTable,
}

impl TableTimer {
    /// Create a timer over an immutable table
    pub fn new(table: TimingTable) -> Self {
        Self { table }
    }

    /// The table this timer reads
    pub fn table(&self) -> &TimingTable {
        &self.table
    }
}

impl Timer for TableTimer {
    fn time(&self, token: &Token) -> Result<f64> {
        let base = self
            .table
            .weight(token.kind)
            .ok_or(PipelineError::MissingTimingRule { kind: token.kind })?;

        if token.kind == TokenKind::Syllable {
            Ok(base + self.table.length_penalty(token.char_len()))
        } else {
            Ok(base)
        }
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

impl<F> Timer for F
where
    F: Fn(&Token) -> Result<f64> + Send + Sync,
{
    fn time(&self, token: &Token) -> Result<f64> {
        self(token)
    }
}

/// Attach a duration from `timer` to every token
pub fn time_tokens(tokens: Vec<Token>, timer: &dyn Timer) -> Result<Vec<Token>> {
    tokens
        .into_iter()
        .map(|token| {
            let duration = timer.time(&token)?;
            Ok(token.with_duration(duration))
        })
        .collect()
}
