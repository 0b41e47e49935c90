//! Event Sink Implementations
//!
//! Provides concrete implementations of GenerationEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - TracingEventSink: forwards events to the log

mod json;
mod logging;

pub use json::JsonEventSink;
pub use logging::TracingEventSink;
