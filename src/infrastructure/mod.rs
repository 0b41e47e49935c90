//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `generators/` - Default stage generators (NestJS TypeScript templates)
//! - `repositories/` - Entity schema loading (JSON, YAML, TOML)
//! - `events/` - Generation event sinks (NDJSON, tracing)

pub mod events;
pub mod generators;
pub mod repositories;

// Re-export for convenience
pub use events::{JsonEventSink, TracingEventSink};
pub use generators::{default_generators, relative_import};
pub use repositories::{FsSchemaRepository, SchemaFormat};
