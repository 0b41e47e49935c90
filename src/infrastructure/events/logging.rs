//! Tracing Event Sink
//!
//! Forwards generation events to `tracing` so they show up in the regular
//! log stream at the configured verbosity.

use tracing::{debug, info, warn};

use crate::domain::ports::{GenerationEvent, GenerationEventSink};

/// Event sink that logs every event
pub struct TracingEventSink;

impl GenerationEventSink for TracingEventSink {
    fn on_event(&self, event: GenerationEvent) {
        match event {
            GenerationEvent::Started { entity_count } => {
                info!(entity_count, "generation started");
            }
            GenerationEvent::EntityStarted { entity } => {
                debug!(%entity, "entity started");
            }
            GenerationEvent::StageCompleted {
                entity,
                stage,
                artifact_count,
                primary_path,
            } => {
                debug!(
                    %entity,
                    %stage,
                    artifact_count,
                    primary = %primary_path.display(),
                    "stage completed"
                );
            }
            GenerationEvent::EntityCompleted {
                entity,
                artifact_count,
            } => {
                info!(%entity, artifact_count, "entity completed");
            }
            GenerationEvent::EntityFailed { entity, error } => {
                warn!(%entity, %error, "entity failed");
            }
            GenerationEvent::Completed { artifact_count } => {
                info!(artifact_count, "generation completed");
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }
}
