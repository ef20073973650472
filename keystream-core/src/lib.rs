//! Text-to-timed-keystroke pipeline for typewriter-style rendering
//!
//! Plain text goes through five pure stages, in fixed order:
//!
//! 1. **Lexer** splits raw text into WORD / SPACE / NEWLINE tokens
//! 2. **Punctuation splitter** moves a trailing `.` or `,` into its own token
//! 3. **Syllabizer** (pluggable) expands words into syllables
//! 4. **Timer** (pluggable) gives every token a duration
//! 5. **Letterizer** spreads each syllable's duration over its letters
//!
//! The result is a [`KeyStream`] that any renderer can pace. The bundled
//! [`Emitter`] writes it to an `io::Write` sink through a [`Scheduler`].
//!
//! # Example
//!
//! ```rust
//! use keystream_core::{KeyStreamPipeline, TokenKind};
//!
//! let pipeline = KeyStreamPipeline::new();
//! let stream = pipeline.make_key_stream("Hi there.").unwrap();
//!
//! assert_eq!(stream.text(), "Hi there.");
//! assert_eq!(stream.tokens()[0].kind, TokenKind::Letter);
//! assert_eq!(stream.tokens()[0].duration, Some(2.0));
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod letterizer;
pub mod lexer;
pub mod pipeline;
pub mod punctuation;
pub mod syllabizer;
pub mod timer;
pub mod token;

// Re-export key types
pub use config::{PipelineConfig, TimingTable};
pub use emitter::{
    CancellationToken, EmitReport, Emitter, Scheduler, ThreadScheduler, VirtualScheduler,
};
pub use error::{ConfigError, EmitError, PipelineError, Result};
pub use letterizer::literize_tokens;
pub use lexer::split_on_spaces;
pub use pipeline::{read_tokens, KeyStream, KeyStreamPipeline, KeyStreamPipelineBuilder};
pub use punctuation::split_out_punctuation;
pub use syllabizer::{syllabize_words, Syllabizer, WholeWordSyllabizer};
pub use timer::{time_tokens, TableTimer, Timer};
pub use token::{concat_text, Token, TokenKind};
