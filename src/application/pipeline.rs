//! Entity pipeline
//!
//! Runs the five stage generators for a single entity, in dependency order,
//! threading primary artifact paths from earlier stages into later ones.
//!
//! ## Flow
//!
//! 1. Validate the entity name (no generator runs on failure)
//! 2. Derive names
//! 3. Service → `service_path`
//! 4. Controller(`service_path`) → `controller_path`
//! 5. Resolver(`service_path`) → `resolver_path`
//! 6. Module(`service_path`, `controller_path`, `resolver_path`)
//! 7. Test spec(`service_path`, `controller_path`)
//!
//! The bundle is the concatenation of service, controller, resolver, module
//! and test artifacts, in that order. Any failure aborts the remaining
//! stages and no partial bundle is returned.

use tracing::{debug, info};

use crate::domain::entities::{ArtifactBundle, DtoRegistry, Entity, StageOutput};
use crate::domain::ports::{GenerationEvent, GenerationEventSink, GeneratorError, GeneratorSet};
use crate::domain::services::{derive_names, NameValidator};
use crate::domain::value_objects::Stage;
use crate::error::{CrudforgeError, CrudforgeResult};

/// Stage orchestration for one entity
pub struct EntityPipeline<'a> {
    generators: &'a GeneratorSet,
    validator: &'a NameValidator,
    events: &'a dyn GenerationEventSink,
}

impl<'a> EntityPipeline<'a> {
    pub fn new(
        generators: &'a GeneratorSet,
        validator: &'a NameValidator,
        events: &'a dyn GenerationEventSink,
    ) -> Self {
        Self {
            generators,
            validator,
            events,
        }
    }

    /// Generate every artifact for `entity`
    pub fn run(&self, entity: &Entity, dtos: &DtoRegistry) -> CrudforgeResult<ArtifactBundle> {
        self.events.on_event(GenerationEvent::EntityStarted {
            entity: entity.name().to_string(),
        });

        match self.generate(entity, dtos) {
            Ok(bundle) => {
                self.events.on_event(GenerationEvent::EntityCompleted {
                    entity: entity.name().to_string(),
                    artifact_count: bundle.len(),
                });
                Ok(bundle)
            }
            Err(err) => {
                self.events.on_event(GenerationEvent::EntityFailed {
                    entity: entity.name().to_string(),
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn generate(&self, entity: &Entity, dtos: &DtoRegistry) -> CrudforgeResult<ArtifactBundle> {
        let entity_type = entity.name();
        self.validator.validate(entity_type)?;

        info!(entity = entity_type, "creating resource");
        let names = derive_names(entity_type);
        let fail = |stage: Stage| {
            move |source: GeneratorError| CrudforgeError::Generation {
                entity: entity_type.to_string(),
                stage,
                source,
            }
        };

        let service = self
            .generators
            .service
            .generate(&names, entity)
            .map_err(fail(Stage::Service))?;
        self.stage_completed(entity_type, Stage::Service, &service);
        let service_path = service.primary_path().to_path_buf();

        let controller = self
            .generators
            .controller
            .generate(&names, &service_path, entity, dtos)
            .map_err(fail(Stage::Controller))?;
        self.stage_completed(entity_type, Stage::Controller, &controller);
        let controller_path = controller.primary_path().to_path_buf();

        let resolver: StageOutput = self
            .generators
            .resolver
            .generate(&names, &service_path, entity, dtos)
            .map_err(fail(Stage::Resolver))?
            .into();
        self.stage_completed(entity_type, Stage::Resolver, &resolver);
        let resolver_path = resolver.primary_path().to_path_buf();

        let module: StageOutput = self
            .generators
            .module
            .generate(&names, &service_path, &controller_path, &resolver_path)
            .map_err(fail(Stage::Module))?
            .into();
        self.stage_completed(entity_type, Stage::Module, &module);

        let test: StageOutput = self
            .generators
            .test
            .generate(&names, entity, &service_path, &controller_path)
            .map_err(fail(Stage::Test))?
            .into();
        self.stage_completed(entity_type, Stage::Test, &test);

        let mut artifacts = Vec::with_capacity(
            service.len() + controller.len() + resolver.len() + module.len() + test.len(),
        );
        for output in [service, controller, resolver, module, test] {
            artifacts.extend(output.into_artifacts());
        }

        Ok(ArtifactBundle::new(entity_type, artifacts))
    }

    fn stage_completed(&self, entity: &str, stage: Stage, output: &StageOutput) {
        debug!(
            entity,
            stage = stage.as_str(),
            artifacts = output.len(),
            primary = %output.primary_path().display(),
            "stage completed"
        );

        if self.events.wants_detailed_events() {
            self.events.on_event(GenerationEvent::StageCompleted {
                entity: entity.to_string(),
                stage,
                artifact_count: output.len(),
                primary_path: output.primary_path().to_path_buf(),
            });
        }
    }
}
