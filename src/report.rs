//! Routing call outcomes to a human-readable sink.
//!
//! [`run`] is the one place where a failed request is swallowed: the failure
//! is written to the sink, traced at debug level with its full detail, and
//! the caller only learns whether the call succeeded.

use std::io::{self, Write};

use serde_json::Value;

use crate::client::http::Transport;
use crate::client::lisk::LiskClient;
use crate::domain::ServiceError;
use crate::operation::Operation;

// ============================================================================
// Sinks
// ============================================================================

/// Destination for call outcomes.
pub trait OutputSink {
    /// A successful payload, prefixed by the operation label.
    fn payload(&mut self, label: &str, payload: &Value);

    /// A failed call, prefixed by what was being attempted.
    fn failure(&mut self, context: &str, error: &ServiceError);
}

/// Sink writing payloads to one stream and failures to another.
#[derive(Debug)]
pub struct StreamSink<O, E> {
    out: O,
    err: E,
}

/// Payloads to stdout, failures to stderr.
pub type ConsoleSink = StreamSink<io::Stdout, io::Stderr>;

impl ConsoleSink {
    #[must_use]
    pub fn console() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> StreamSink<O, E> {
    #[must_use]
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[must_use]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> OutputSink for StreamSink<O, E> {
    fn payload(&mut self, label: &str, payload: &Value) {
        if let Err(e) = writeln!(self.out, "{label} {payload:#}") {
            tracing::warn!("failed to write payload: {e}");
        }
    }

    fn failure(&mut self, context: &str, error: &ServiceError) {
        if let Err(e) = writeln!(self.err, "{context}: {error}") {
            tracing::warn!("failed to write error message: {e}");
        }
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Execute `operation` and report its outcome to `sink` exactly once.
///
/// Never returns an error. Returns `true` when the call succeeded.
pub async fn run<T, S>(client: &LiskClient<T>, operation: &Operation, sink: &mut S) -> bool
where
    T: Transport,
    S: OutputSink + ?Sized,
{
    match operation.execute(client).await {
        Ok(payload) => {
            sink.payload(operation.label(), &payload);
            true
        }
        Err(error) => {
            tracing::debug!(endpoint = %operation.endpoint(), ?error, "operation failed");
            sink.failure(&operation.failure_context(), &error);
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
