use crate::types::RawError;

/// Receives the diagnostic record emitted before a classification returns.
pub trait DiagnosticSink: Sync {
    fn record(&self, context: &str, raw: &RawError);
}

/// Forwards diagnostics to the `tracing` facade at `ERROR` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, context: &str, raw: &RawError) {
        tracing::error!(context, raw_error = %raw, "Error in {context}");
    }
}

/// Drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _context: &str, _raw: &RawError) {}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn record(&self, context: &str, raw: &RawError) {
        (**self).record(context, raw);
    }
}
