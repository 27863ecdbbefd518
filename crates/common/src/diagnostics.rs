//! Non-fatal diagnostics emitted while normalizing ad-unit input.
//!
//! Setters never return errors. When a value is clamped or a write is
//! refused, a [`Diagnostic`] is handed to the [`DiagnosticSink`] injected
//! into the configuration. The default sink forwards to the `log` facade;
//! tests install a [`RecordingSink`] and assert on what was emitted.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use derive_more::Display;

/// A warning about caller input that was normalized or ignored.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum Diagnostic {
    /// The refresh interval was outside the display range and got clamped.
    #[display(
        "refresh interval {requested}s is out of range, using {applied}s instead"
    )]
    RefreshIntervalClamped { requested: f64, applied: f64 },

    /// The refresh interval cannot be written for outstream video ads.
    #[display(
        "'refresh_interval' is not assignable for outstream video ads (ignored {requested}s)"
    )]
    RefreshIntervalNotAssignable { requested: f64 },
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `log::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}

/// Shared handle to the sink of one configuration and its clones.
#[derive(Clone)]
pub(crate) struct Diagnostics(Arc<dyn DiagnosticSink>);

impl Diagnostics {
    pub(crate) fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self(sink)
    }

    pub(crate) fn warn(&self, diagnostic: Diagnostic) {
        self.0.emit(&diagnostic);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self(Arc::new(LogSink))
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Diagnostics")
    }
}
