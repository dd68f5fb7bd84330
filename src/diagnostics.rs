use std::sync::Mutex;

use tracing::warn;

/// Receiver for soft-check findings raised while validating a payload.
///
/// Findings never change a validation result; they only describe payloads
/// that are usable but incomplete.
pub trait DiagnosticSink {
    fn warn(&self, source: &str, message: &str);
}

/// Forwards findings to `tracing` at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn warn(&self, source: &str, message: &str) {
        warn!(source = source, "{}", message);
    }
}

/// Keeps findings in memory so callers can inspect or report them later
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub source: String,
    pub message: String,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first
    pub fn entries(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn warn(&self, source: &str, message: &str) {
        let entry = Diagnostic {
            source: source.to_string(),
            message: message.to_string(),
        };
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}
