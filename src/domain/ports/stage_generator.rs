//! Stage generator ports
//!
//! One trait per architectural layer. Each generator is a pure function of
//! its inputs: the entity, its derived names, the paths of the artifacts it
//! must reference, and the shared DTO registry. The pipeline never inspects
//! generated content, only primary artifact paths.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::{Artifact, DtoRegistry, Entity, StageOutput};
use crate::domain::value_objects::DerivedNames;

/// Failure inside a stage generator
///
/// Opaque to the pipeline, which only wraps it with the entity and stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The DTO registry has no entry for the entity being generated
    #[error("no DTOs registered for entity '{entity}'")]
    MissingDtos { entity: String },

    /// A lookup field points at an entity without DTOs
    #[error("field '{field}' references unknown entity '{related_entity}'")]
    UnknownRelation {
        field: String,
        related_entity: String,
    },

    /// The generator cannot express a field of this type
    #[error("field '{field}' has unsupported type '{data_type}'")]
    UnsupportedField { field: String, data_type: String },

    /// Template rendering failed
    #[error("template error: {0}")]
    Template(String),
}

/// Generates the data access service
pub trait ServiceGenerator: Send + Sync {
    /// Returns the service artifacts; the primary one is what other layers import
    fn generate(&self, names: &DerivedNames, entity: &Entity)
        -> Result<StageOutput, GeneratorError>;
}

/// Generates the HTTP controller
pub trait ControllerGenerator: Send + Sync {
    fn generate(
        &self,
        names: &DerivedNames,
        service_path: &Path,
        entity: &Entity,
        dtos: &DtoRegistry,
    ) -> Result<StageOutput, GeneratorError>;
}

/// Generates the GraphQL resolver
pub trait ResolverGenerator: Send + Sync {
    fn generate(
        &self,
        names: &DerivedNames,
        service_path: &Path,
        entity: &Entity,
        dtos: &DtoRegistry,
    ) -> Result<Artifact, GeneratorError>;
}

/// Generates the module that wires service, controller and resolver together
pub trait ModuleGenerator: Send + Sync {
    fn generate(
        &self,
        names: &DerivedNames,
        service_path: &Path,
        controller_path: &Path,
        resolver_path: &Path,
    ) -> Result<Artifact, GeneratorError>;
}

/// Generates the test spec exercising the controller against the service
pub trait TestSpecGenerator: Send + Sync {
    fn generate(
        &self,
        names: &DerivedNames,
        entity: &Entity,
        service_path: &Path,
        controller_path: &Path,
    ) -> Result<Artifact, GeneratorError>;
}

/// The five stage generators a pipeline runs
pub struct GeneratorSet {
    pub service: Box<dyn ServiceGenerator>,
    pub controller: Box<dyn ControllerGenerator>,
    pub resolver: Box<dyn ResolverGenerator>,
    pub module: Box<dyn ModuleGenerator>,
    pub test: Box<dyn TestSpecGenerator>,
}

impl GeneratorSet {
    pub fn new(
        service: impl ServiceGenerator + 'static,
        controller: impl ControllerGenerator + 'static,
        resolver: impl ResolverGenerator + 'static,
        module: impl ModuleGenerator + 'static,
        test: impl TestSpecGenerator + 'static,
    ) -> Self {
        Self {
            service: Box::new(service),
            controller: Box::new(controller),
            resolver: Box::new(resolver),
            module: Box::new(module),
            test: Box::new(test),
        }
    }
}
