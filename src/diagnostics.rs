//! # diagnostics: observational messages emitted while reading front matter
//!
//! The parser never logs directly. It reports every fallback (a default substituted for a
//! missing field) and every required-field concern through a [`DiagnosticSink`] handed to
//! it at construction. Production code uses [`TracingSink`], which forwards to `tracing`;
//! tests capture messages with `MockDiagnosticSink` or a recording sink.
//!
//! Diagnostics never change what an accessor returns.

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A safe default was applied.
    Info,
    /// A required field is missing or a value could not be decoded.
    Warning,
}

/// Capability for recording diagnostics about one document.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, severity: Severity, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn record(&self, severity: Severity, message: &str) {
        (**self).record(severity, message)
    }
}

/// Default sink: `Info` becomes `tracing::info!`, `Warning` becomes `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(diagnostic = true, "{message}"),
            Severity::Warning => tracing::warn!(diagnostic = true, "{message}"),
        }
    }
}
