//! JSON Event Sink
//!
//! Outputs generation events as NDJSON for CI/automation consumption.

use crate::domain::ports::{GenerationEvent, GenerationEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// One line per event even when pipelines report concurrently
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl GenerationEventSink for JsonEventSink {
    fn on_event(&self, event: GenerationEvent) {
        let json = match event {
            GenerationEvent::Started { entity_count } => {
                serde_json::json!({
                    "event": "start",
                    "command": "generate",
                    "entity_count": entity_count,
                })
            }

            GenerationEvent::EntityStarted { entity } => {
                serde_json::json!({
                    "event": "entity_start",
                    "command": "generate",
                    "entity": entity,
                })
            }

            GenerationEvent::StageCompleted {
                entity,
                stage,
                artifact_count,
                primary_path,
            } => {
                serde_json::json!({
                    "event": "stage_complete",
                    "command": "generate",
                    "entity": entity,
                    "stage": stage.as_str(),
                    "artifact_count": artifact_count,
                    "primary_path": primary_path.display().to_string(),
                })
            }

            GenerationEvent::EntityCompleted {
                entity,
                artifact_count,
            } => {
                serde_json::json!({
                    "event": "entity_complete",
                    "command": "generate",
                    "entity": entity,
                    "artifact_count": artifact_count,
                })
            }

            GenerationEvent::EntityFailed { entity, error } => {
                serde_json::json!({
                    "event": "entity_error",
                    "command": "generate",
                    "entity": entity,
                    "error": error,
                })
            }

            GenerationEvent::Completed { artifact_count } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "generate",
                    "status": "success",
                    "artifact_count": artifact_count,
                })
            }
        };

        self.write_event(json);
    }
}
