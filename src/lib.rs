//! Crudforge - entity-to-artifact compiler
//!
//! Crudforge turns abstract entity descriptions (name, fields, relations)
//! into the generated source files of a layered CRUD backend: service,
//! HTTP controller, GraphQL resolver, aggregating module and a test spec.
//! Names and import paths agree across every file of every entity.
//!
//! ## Layers
//!
//! - `domain` - entities, name derivation, validation, generator ports
//! - `application` - the per-entity pipeline and the batch orchestrator
//! - `infrastructure` - default templates, schema loading, event sinks
//! - `config` - layered configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BatchOptions, BatchOrchestrator, BatchResult, EntityPipeline};
pub use config::Config;
pub use domain::entities::{
    Artifact, ArtifactBundle, DataType, DtoRegistry, Entity, EntityField,
};
pub use domain::services::derive_names;
pub use domain::value_objects::{DerivedNames, Stage};
pub use error::{CrudforgeError, CrudforgeResult};
pub use infrastructure::default_generators;
