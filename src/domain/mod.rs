//! Domain Layer
//!
//! The core of Crudforge - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Entity, Artifact, DtoRegistry
//! - `value_objects/` - DerivedNames, Stage, name rule outcomes
//! - `services/` - name derivation, validation, collision check, DTO registry
//! - `ports/` - stage generator, event and schema repository interfaces

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
