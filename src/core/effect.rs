//! Observable effects and the sinks that receive them.
//!
//! Providers never print directly. Every operation receives an explicit
//! [`EffectSink`] and emits exactly one [`Effect`] describing what it did.
//! The CLI wires a [`Console`] sink; tests and `--json` output use a [`Trace`].

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// One observable action performed by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Label of the provider that acted (e.g. `win`, `truck`, `report`)
    pub variant: String,

    /// Operation name, identical across variants of a capability
    pub operation: String,

    /// Human-readable line describing the action
    pub message: String,
}

impl Effect {
    /// Create a new effect.
    pub fn new(
        variant: impl Into<String>,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Effect {
            variant: variant.into(),
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Receiver of provider effects.
pub trait EffectSink {
    /// Record a single effect.
    fn emit(&mut self, effect: Effect);
}

/// In-memory record of emitted effects, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    effects: Vec<Effect>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Trace::default()
    }

    /// All recorded effects.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Operation names in emission order.
    pub fn operations(&self) -> Vec<&str> {
        self.effects.iter().map(|e| e.operation.as_str()).collect()
    }

    /// Messages in emission order.
    pub fn messages(&self) -> Vec<&str> {
        self.effects.iter().map(|e| e.message.as_str()).collect()
    }

    /// Number of recorded effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl EffectSink for Trace {
    fn emit(&mut self, effect: Effect) {
        self.effects.push(effect);
    }
}

/// Sink writing one line per effect to a writer.
///
/// Write failures do not interrupt providers; the first one is kept and
/// reported by [`Console::finish`].
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl Console<io::Stdout> {
    /// Console writing to standard output.
    pub fn stdout() -> Self {
        Console::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    /// Create a console over any writer.
    pub fn new(out: W) -> Self {
        Console { out, error: None }
    }

    /// Flush the writer and surface the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> EffectSink for Console<W> {
    fn emit(&mut self, effect: Effect) {
        tracing::trace!(variant = %effect.variant, operation = %effect.operation, "effect");
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", effect.message) {
            self.error = Some(err);
        }
    }
}
