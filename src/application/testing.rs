//! In-crate fakes for pipeline and batch unit tests
//!
//! One fake implements every stage and records `(entity, stage)`. Path
//! threading is covered by the recording generators under `tests/`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::entities::{Artifact, DtoRegistry, Entity, StageOutput};
use crate::domain::ports::{
    ControllerGenerator, GenerationEvent, GenerationEventSink, GeneratorError, GeneratorSet,
    ModuleGenerator, ResolverGenerator, ServiceGenerator, TestSpecGenerator,
};
use crate::domain::services::build_dto_registry;
use crate::domain::value_objects::{DerivedNames, Stage};

#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<(String, Stage)>>>,
    failing: Option<(String, Stage)>,
    delays: Arc<HashMap<String, Duration>>,
}

impl CallLog {
    pub fn failing_at(mut self, entity: &str, stage: Stage) -> Self {
        self.failing = Some((entity.to_string(), stage));
        self
    }

    pub fn with_delay(mut self, entity: &str, delay: Duration) -> Self {
        let mut delays = (*self.delays).clone();
        delays.insert(entity.to_string(), delay);
        self.delays = Arc::new(delays);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    pub fn stages_for(&self, entity: &str) -> Vec<Stage> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| e == entity)
            .map(|(_, stage)| *stage)
            .collect()
    }

    /// Record the call, then emit `<i>/<i>.<suffix>` or fail as configured
    fn emit(
        &self,
        names: &DerivedNames,
        stage: Stage,
        suffix: &str,
    ) -> Result<Artifact, GeneratorError> {
        if let Some(delay) = self.delays.get(names.type_name()) {
            std::thread::sleep(*delay);
        }
        self.calls
            .lock()
            .unwrap()
            .push((names.type_name().to_string(), stage));
        if let Some((entity, failing)) = &self.failing {
            if entity == names.type_name() && *failing == stage {
                return Err(GeneratorError::Template(format!("{stage} exploded")));
            }
        }
        let i = names.instance_name();
        Ok(Artifact::new(PathBuf::from(i).join(format!("{i}.{suffix}")), stage.as_str()))
    }
}

struct Fake(CallLog);

impl ServiceGenerator for Fake {
    fn generate(&self, names: &DerivedNames, _: &Entity) -> Result<StageOutput, GeneratorError> {
        let primary = self.0.emit(names, Stage::Service, "service.ts")?;
        Ok(StageOutput::new(primary).with_secondary(Artifact::new("service.base.ts", "")))
    }
}

impl ControllerGenerator for Fake {
    fn generate(
        &self,
        names: &DerivedNames,
        _: &Path,
        _: &Entity,
        _: &DtoRegistry,
    ) -> Result<StageOutput, GeneratorError> {
        let primary = self.0.emit(names, Stage::Controller, "controller.ts")?;
        Ok(StageOutput::new(primary).with_secondary(Artifact::new("controller.base.ts", "")))
    }
}

impl ResolverGenerator for Fake {
    fn generate(
        &self,
        names: &DerivedNames,
        _: &Path,
        _: &Entity,
        _: &DtoRegistry,
    ) -> Result<Artifact, GeneratorError> {
        self.0.emit(names, Stage::Resolver, "resolver.ts")
    }
}

impl ModuleGenerator for Fake {
    fn generate(
        &self,
        names: &DerivedNames,
        _: &Path,
        _: &Path,
        _: &Path,
    ) -> Result<Artifact, GeneratorError> {
        self.0.emit(names, Stage::Module, "module.ts")
    }
}

impl TestSpecGenerator for Fake {
    fn generate(
        &self,
        names: &DerivedNames,
        _: &Entity,
        _: &Path,
        _: &Path,
    ) -> Result<Artifact, GeneratorError> {
        self.0.emit(names, Stage::Test, "spec.ts")
    }
}

pub fn fake_generators(log: &CallLog) -> GeneratorSet {
    GeneratorSet::new(
        Fake(log.clone()),
        Fake(log.clone()),
        Fake(log.clone()),
        Fake(log.clone()),
        Fake(log.clone()),
    )
}

pub fn registry_for(entities: &[Entity]) -> DtoRegistry {
    build_dto_registry(entities, Path::new(""))
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<GenerationEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<GenerationEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl GenerationEventSink for RecordingSink {
    fn on_event(&self, event: GenerationEvent) {
        self.events.lock().unwrap().push(event);
    }
}
