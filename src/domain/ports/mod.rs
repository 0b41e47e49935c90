//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod generation_events;
pub mod schema_repository;
pub mod stage_generator;

pub use generation_events::{GenerationEvent, GenerationEventSink, NoopEventSink};
pub use schema_repository::EntitySchemaRepository;
pub use stage_generator::{
    ControllerGenerator, GeneratorError, GeneratorSet, ModuleGenerator, ResolverGenerator,
    ServiceGenerator, TestSpecGenerator,
};
