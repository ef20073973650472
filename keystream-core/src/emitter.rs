//! Paced emission of a key stream
//!
//! The emitter writes the first token immediately and every following token
//! after a delay of `previous.duration × letter_timing_ms`. Waiting goes
//! through a [`Scheduler`] so tests can run on a virtual clock, and a
//! [`CancellationToken`] is checked before every continuation.

use crate::error::EmitError;
use crate::token::Token;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Convert abstract duration units to a wall-clock delay
///
/// Negative or non-finite results clamp to zero.
pub fn scale_delay(units: f64, letter_timing_ms: f64) -> Duration {
    let nanos = (units * letter_timing_ms * 1_000_000.0).round();
    if nanos.is_finite() && nanos > 0.0 {
        Duration::from_nanos(nanos as u64)
    } else {
        Duration::ZERO
    }
}

/// Waits out the delay before the next token is written
pub trait Scheduler {
    /// Return once `delay` has elapsed
    fn after(&mut self, delay: Duration);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn after(&mut self, delay: Duration) {
        (**self).after(delay);
    }
}

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn after(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Records delays and advances a virtual clock without sleeping
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    now: Duration,
    delays: Vec<Duration>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Every delay requested, in order
    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }
}

impl Scheduler for VirtualScheduler {
    fn after(&mut self, delay: Duration) {
        self.now += delay;
        self.delays.push(delay);
    }
}

/// Shared flag that stops an emission before its next token
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; visible to every clone
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Outcome of one emission run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitReport {
    /// Tokens written to the sink
    pub emitted: usize,
    /// Whether the run stopped on cancellation
    pub cancelled: bool,
    /// Sum of all delays handed to the scheduler
    pub elapsed: Duration,
}

/// Writes token text to a sink with per-token pacing
pub struct Emitter<W: Write, S: Scheduler> {
    writer: W,
    scheduler: S,
    letter_timing_ms: f64,
    cancel: CancellationToken,
}

impl<W: Write, S: Scheduler> Emitter<W, S> {
    /// Create an emitter that never gets cancelled from outside
    pub fn new(writer: W, scheduler: S, letter_timing_ms: f64) -> Self {
        Self {
            writer,
            scheduler,
            letter_timing_ms,
            cancel: CancellationToken::new(),
        }
    }

    /// Observe `cancel` before every token
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Clone of the token this emitter observes
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Give back the sink and scheduler
    pub fn into_inner(self) -> (W, S) {
        (self.writer, self.scheduler)
    }

    /// Emit `tokens` in order, flushing after each one
    pub fn emit(&mut self, tokens: &[Token]) -> Result<EmitReport, EmitError> {
        let mut report = EmitReport::default();
        log::debug!(
            "emitting {} tokens at {}ms per unit",
            tokens.len(),
            self.letter_timing_ms
        );

        let mut previous: Option<&Token> = None;
        for token in tokens {
            if let Some(previous) = previous {
                if self.cancel.is_cancelled() {
                    break;
                }
                let delay = scale_delay(previous.duration.unwrap_or(0.0), self.letter_timing_ms);
                self.scheduler.after(delay);
                report.elapsed += delay;
            }

            if self.cancel.is_cancelled() {
                break;
            }

            self.writer.write_all(token.text.as_bytes())?;
            self.writer.flush()?;
            report.emitted += 1;
            previous = Some(token);
        }

        if self.cancel.is_cancelled() && report.emitted < tokens.len() {
            log::debug!("emission cancelled after {} tokens", report.emitted);
            report.cancelled = true;
        }

        Ok(report)
    }
}
