//! Domain Entities
//!
//! - `Entity` - an abstract entity description (the compiler input)
//! - `Artifact` - one generated file, plus the per-stage and per-entity groupings
//! - `DtoRegistry` - transfer-object definitions shared by all generators

mod artifact;
mod dto;
mod entity;

pub use artifact::{Artifact, ArtifactBundle, StageOutput};
pub use dto::{DtoDefinition, DtoRegistry, EntityDtos};
pub use entity::{DataType, Entity, EntityField};
