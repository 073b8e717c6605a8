//! Diagnostic sink for non-fatal conditions.
//!
//! Data-level problems (a flag with no value, a malformed source row) are
//! reported through an injectable sink instead of being written straight to
//! a process-wide stream, so the resolver and the conversion driver can be
//! tested without capturing stderr.

use std::io::{self, Write};

use colored::Colorize;

/// Receives non-fatal diagnostics emitted during resolution and conversion.
pub trait DiagnosticSink {
    fn warn(&mut self, message: &str);
}

/// Production sink: writes warnings to stderr with a colored prefix.
///
/// Color handling (including `NO_COLOR`) is delegated to the `colored`
/// crate.
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn warn(&mut self, message: &str) {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle, "{} {}", "Warning:".yellow(), message).ok();
    }
}

/// Collects diagnostics in memory; used by tests to assert on emitted
/// messages.
#[derive(Debug, Default)]
pub struct VecSink {
    pub warnings: Vec<String>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.warnings.iter().any(|w| w.contains(needle))
    }
}

impl DiagnosticSink for VecSink {
    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
