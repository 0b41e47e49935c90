//! Application Layer
//!
//! Use cases that orchestrate the generation flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates stage generators supplied by Infrastructure
//!
//! ## Use Cases
//!
//! - `EntityPipeline` - Runs the five stages for one entity
//! - `BatchOrchestrator` - Runs pipelines for a whole batch, concurrently

pub mod generate;
pub mod pipeline;
#[cfg(test)]
pub(crate) mod testing;

pub use generate::{BatchOptions, BatchOrchestrator, BatchResult};
pub use pipeline::EntityPipeline;
