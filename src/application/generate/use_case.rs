//! Batch Orchestrator
//!
//! Fans entity pipelines out over a rayon pool. Collecting a parallel
//! iterator keeps input order regardless of which entity finishes first,
//! and collecting into `Result` surfaces a failure as the batch result.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, warn};

use super::options::BatchOptions;
use super::result::BatchResult;
use crate::application::pipeline::EntityPipeline;
use crate::domain::entities::{ArtifactBundle, DtoRegistry, Entity};
use crate::domain::ports::{GenerationEvent, GenerationEventSink, GeneratorSet, NoopEventSink};
use crate::domain::services::{check_name_collisions, NameValidator};
use crate::error::{CrudforgeError, CrudforgeResult};

/// Runs the entity pipeline for every entity and flattens the results
pub struct BatchOrchestrator {
    generators: GeneratorSet,
    validator: NameValidator,
    events: Arc<dyn GenerationEventSink>,
    options: BatchOptions,
}

impl BatchOrchestrator {
    /// Create an orchestrator with default options and no event sink
    pub fn new(generators: GeneratorSet) -> Self {
        Self {
            generators,
            validator: NameValidator::new(),
            events: Arc::new(NoopEventSink),
            options: BatchOptions::default(),
        }
    }

    pub fn with_validator(mut self, validator: NameValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_events(mut self, events: Arc<dyn GenerationEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn with_options(mut self, options: BatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Generate every artifact for every entity
    ///
    /// Either all entities succeed and the full result is returned, or the
    /// batch fails with the error of a failing entity and nothing else.
    pub fn run(&self, entities: &[Entity], dtos: &DtoRegistry) -> CrudforgeResult<BatchResult> {
        self.events.on_event(GenerationEvent::Started {
            entity_count: entities.len(),
        });
        info!(
            entities = entities.len(),
            parallel = self.options.parallel,
            "generating resources"
        );

        if self.options.check_collisions {
            check_name_collisions(entities, &self.validator)?;
        }

        let bundles = self.run_pipelines(entities, dtos).inspect_err(|err| {
            warn!(entity = err.entity().unwrap_or("-"), error = %err, "batch aborted");
        })?;

        let result = BatchResult::new(bundles);
        self.events.on_event(GenerationEvent::Completed {
            artifact_count: result.artifact_count(),
        });
        Ok(result)
    }

    fn run_pipelines(
        &self,
        entities: &[Entity],
        dtos: &DtoRegistry,
    ) -> CrudforgeResult<Vec<ArtifactBundle>> {
        let pipeline = EntityPipeline::new(&self.generators, &self.validator, self.events.as_ref());

        if !self.options.parallel {
            return entities
                .iter()
                .map(|entity| pipeline.run(entity, dtos))
                .collect();
        }

        let fan_out = || {
            entities
                .par_iter()
                .map(|entity| pipeline.run(entity, dtos))
                .collect::<CrudforgeResult<Vec<_>>>()
        };

        if self.options.threads == 0 {
            return fan_out();
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.threads)
            .build()
            .map_err(|e| CrudforgeError::ThreadPool {
                message: e.to_string(),
            })?;
        pool.install(fan_out)
    }
}
