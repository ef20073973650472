//! Pipeline orchestration
//!
//! Runs lexer → punctuation splitter → syllabizer → timer → letterizer in
//! that fixed order. A [`KeyStreamPipeline`] holds only its strategies and
//! the letter timing scale, so one instance can process any number of
//! independent inputs, from any number of threads.

use crate::config::{defaults, PipelineConfig, TimingTable};
use crate::emitter::{
    scale_delay, CancellationToken, EmitReport, Emitter, Scheduler, ThreadScheduler,
};
use crate::error::{ConfigError, EmitError, Result};
use crate::letterizer;
use crate::lexer;
use crate::punctuation;
use crate::syllabizer::{self, Syllabizer, WholeWordSyllabizer};
use crate::timer::{self, TableTimer, Timer};
use crate::token::{concat_text, Token};
use std::fmt;
use std::io::Write;
use std::time::Duration;

/// Final timed token stream for one input
#[derive(Debug, Clone, PartialEq)]
pub struct KeyStream {
    tokens: Vec<Token>,
    letter_timing_ms: f64,
}

impl KeyStream {
    pub fn new(tokens: Vec<Token>, letter_timing_ms: f64) -> Self {
        Self {
            tokens,
            letter_timing_ms,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Milliseconds per duration unit this stream was built with
    pub fn letter_timing_ms(&self) -> f64 {
        self.letter_timing_ms
    }

    /// Text as it reads once fully emitted
    pub fn text(&self) -> String {
        concat_text(&self.tokens)
    }

    /// Sum of every token's duration, in abstract units
    pub fn total_duration(&self) -> f64 {
        self.tokens.iter().filter_map(|t| t.duration).sum()
    }

    /// Delay to wait before each token; the first is always zero
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        let first = self.tokens.first().map(|_| Duration::ZERO);
        first.into_iter().chain(
            self.tokens
                .windows(2)
                .map(|pair| scale_delay(pair[0].duration.unwrap_or(0.0), self.letter_timing_ms)),
        )
    }

    /// Wall-clock time an emitter waits in total
    ///
    /// The last token's own duration is never waited on.
    pub fn total_delay(&self) -> Duration {
        self.delays().sum()
    }
}

/// Configurable text-to-key-stream pipeline
pub struct KeyStreamPipeline {
    syllabizer: Box<dyn Syllabizer>,
    timer: Box<dyn Timer>,
    letter_timing_ms: f64,
}

impl Default for KeyStreamPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KeyStreamPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyStreamPipeline")
            .field("syllabizer", &self.syllabizer.name())
            .field("timer", &self.timer.name())
            .field("letter_timing_ms", &self.letter_timing_ms)
            .finish()
    }
}

impl KeyStreamPipeline {
    /// Create a pipeline with the default strategies
    pub fn new() -> Self {
        Self {
            syllabizer: Box::new(WholeWordSyllabizer),
            timer: Box::new(TableTimer::default()),
            letter_timing_ms: defaults::LETTER_TIMING_MS,
        }
    }

    /// Create a pipeline with default strategies driven by `config`
    pub fn with_config(config: PipelineConfig) -> std::result::Result<Self, ConfigError> {
        KeyStreamPipelineBuilder::new().config(config).build()
    }

    /// Start a builder
    pub fn builder() -> KeyStreamPipelineBuilder {
        KeyStreamPipelineBuilder::new()
    }

    pub fn letter_timing_ms(&self) -> f64 {
        self.letter_timing_ms
    }

    pub fn syllabizer_name(&self) -> &'static str {
        self.syllabizer.name()
    }

    pub fn timer_name(&self) -> &'static str {
        self.timer.name()
    }

    pub fn split_on_spaces(&self, input: &str) -> Result<Vec<Token>> {
        lexer::split_on_spaces(input)
    }

    pub fn split_out_punctuation(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        punctuation::split_out_punctuation(tokens)
    }

    pub fn syllabize_words(&self, tokens: Vec<Token>) -> Vec<Token> {
        syllabizer::syllabize_words(tokens, self.syllabizer.as_ref())
    }

    pub fn time_tokens(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        timer::time_tokens(tokens, self.timer.as_ref())
    }

    pub fn literize_tokens(&self, tokens: Vec<Token>) -> Vec<Token> {
        letterizer::literize_tokens(tokens)
    }

    /// Run every stage over `input`
    ///
    /// Any stage error aborts the whole input; no partial stream is returned.
    pub fn make_key_stream(&self, input: &str) -> Result<KeyStream> {
        let tokens = self.split_on_spaces(input)?;
        log::trace!("after spaces: {:?}", tokens);
        let tokens = self.split_out_punctuation(tokens)?;
        log::trace!("after punctuation: {:?}", tokens);
        let tokens = self.syllabize_words(tokens);
        log::trace!("after syllables: {:?}", tokens);
        let tokens = self.time_tokens(tokens)?;
        log::trace!("after times: {:?}", tokens);
        let tokens = self.literize_tokens(tokens);

        log::debug!(
            "built key stream of {} tokens from {} chars ({} syllabizer, {} timer)",
            tokens.len(),
            input.chars().count(),
            self.syllabizer.name(),
            self.timer.name()
        );

        Ok(KeyStream::new(tokens, self.letter_timing_ms))
    }

    /// Build the key stream for `text` and emit it to `writer`
    pub fn speak_to<W: Write, S: Scheduler>(
        &self,
        text: &str,
        writer: W,
        scheduler: S,
        cancel: CancellationToken,
    ) -> std::result::Result<EmitReport, EmitError> {
        let key_stream = self.make_key_stream(text)?;
        let mut emitter =
            Emitter::new(writer, scheduler, self.letter_timing_ms).with_cancellation(cancel);
        emitter.emit(key_stream.tokens())
    }

    /// Type `text` to stdout with real delays
    pub fn console_speak(&self, text: &str) -> std::result::Result<EmitReport, EmitError> {
        self.speak_to(
            text,
            std::io::stdout(),
            ThreadScheduler,
            CancellationToken::new(),
        )
    }
}

/// Builder for KeyStreamPipeline
///
/// Provides a fluent interface for swapping strategies and timing.
#[derive(Default)]
pub struct KeyStreamPipelineBuilder {
    syllabizer: Option<Box<dyn Syllabizer>>,
    timer: Option<Box<dyn Timer>>,
    config: PipelineConfig,
}

impl KeyStreamPipelineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `syllabizer` instead of whole-word syllables
    pub fn syllabizer(mut self, syllabizer: impl Syllabizer + 'static) -> Self {
        self.syllabizer = Some(Box::new(syllabizer));
        self
    }

    /// Use `timer` instead of the table timer
    pub fn timer(mut self, timer: impl Timer + 'static) -> Self {
        self.timer = Some(Box::new(timer));
        self
    }

    /// Weights for the default table timer
    pub fn timing_table(mut self, table: TimingTable) -> Self {
        self.config.timing = table;
        self
    }

    /// Set the milliseconds per duration unit
    pub fn letter_timing_ms(mut self, ms: f64) -> Self {
        self.config.letter_timing_ms = ms;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and build the pipeline
    pub fn build(self) -> std::result::Result<KeyStreamPipeline, ConfigError> {
        self.config.validate()?;

        let PipelineConfig {
            letter_timing_ms,
            timing,
        } = self.config;

        Ok(KeyStreamPipeline {
            syllabizer: self
                .syllabizer
                .unwrap_or_else(|| Box::new(WholeWordSyllabizer)),
            timer: self
                .timer
                .unwrap_or_else(|| Box::new(TableTimer::new(timing))),
            letter_timing_ms,
        })
    }
}

/// Run `input` through a default pipeline
pub fn read_tokens(input: &str) -> Result<Vec<Token>> {
    Ok(KeyStreamPipeline::new().make_key_stream(input)?.into_tokens())
}
