//! Generation Event Port
//!
//! Observable interface for batch generation: progress display, NDJSON
//! event streams for CI, and log forwarding.

use std::path::PathBuf;

use crate::domain::value_objects::Stage;

/// Event emitted while generating a batch
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationEvent {
    /// Batch started
    Started { entity_count: usize },

    /// Pipeline for one entity started
    EntityStarted { entity: String },

    /// A stage finished for one entity
    StageCompleted {
        entity: String,
        stage: Stage,
        artifact_count: usize,
        primary_path: PathBuf,
    },

    /// Pipeline for one entity finished
    EntityCompleted {
        entity: String,
        artifact_count: usize,
    },

    /// Pipeline for one entity failed; the batch will fail
    EntityFailed { entity: String, error: String },

    /// Batch finished successfully
    Completed { artifact_count: usize },
}

/// Trait for receiving generation events
///
/// Pipelines run concurrently, so sinks are shared across worker threads.
/// Events of different entities may interleave.
pub trait GenerationEventSink: Send + Sync {
    fn on_event(&self, event: GenerationEvent);

    /// Whether this sink wants per-stage events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerationEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerationEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
