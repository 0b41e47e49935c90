//! Ordering contracts
//!
//! Stages run service, controller, resolver, module, test for every entity,
//! and the batch result follows entity input order.

use std::path::PathBuf;

use crudforge::domain::ports::NoopEventSink;
use crudforge::domain::services::{build_dto_registry, NameValidator};
use crudforge::{BatchOptions, BatchOrchestrator, Entity, EntityPipeline, Stage};

use crate::common::*;

fn entities(names: &[&str]) -> Vec<Entity> {
    names.iter().map(|n| Entity::new(*n)).collect()
}

#[test]
fn contract_stages_run_in_dependency_order() {
    let recorder = Recorder::new();
    let generators = recorder.generators();
    let validator = NameValidator::new();
    let batch = entities(&["OrderItem"]);
    let dtos = build_dto_registry(&batch, &PathBuf::new());

    EntityPipeline::new(&generators, &validator, &NoopEventSink)
        .run(&batch[0], &dtos)
        .unwrap();

    let stages: Vec<Stage> = recorder.calls().into_iter().map(|c| c.stage).collect();
    assert_eq!(stages, Stage::ORDERED.to_vec());
}

#[test]
fn contract_bundle_is_concatenation_in_stage_order() {
    let recorder = Recorder::new();
    let generators = recorder.generators();
    let validator = NameValidator::new();
    let batch = entities(&["Person"]);
    let dtos = build_dto_registry(&batch, &PathBuf::new());

    let bundle = EntityPipeline::new(&generators, &validator, &NoopEventSink)
        .run(&batch[0], &dtos)
        .unwrap();

    let paths: Vec<PathBuf> = bundle
        .artifacts()
        .iter()
        .map(|a| a.path().to_path_buf())
        .collect();
    let expected: Vec<PathBuf> = [
        "service",
        "service.base",
        "controller",
        "controller.base",
        "resolver",
        "module",
        "spec",
    ]
    .iter()
    .map(|f| PathBuf::from("person").join(f))
    .collect();
    assert_eq!(paths, expected);
}

#[test]
fn contract_batch_follows_input_order() {
    let recorder = Recorder::new();
    let batch = entities(&["Zebra", "Apple", "Mango", "Banana", "Kiwi"]);
    let dtos = build_dto_registry(&batch, &PathBuf::new());

    let result = BatchOrchestrator::new(recorder.generators())
        .with_options(BatchOptions::new().with_threads(4))
        .run(&batch, &dtos)
        .unwrap();

    let order: Vec<&str> = result.bundles().iter().map(|b| b.entity()).collect();
    assert_eq!(order, vec!["Zebra", "Apple", "Mango", "Banana", "Kiwi"]);

    let first_paths: Vec<PathBuf> = result
        .artifacts()
        .step_by(7)
        .map(|a| a.path().to_path_buf())
        .collect();
    assert_eq!(
        first_paths,
        vec![
            PathBuf::from("zebra/service"),
            PathBuf::from("apple/service"),
            PathBuf::from("mango/service"),
            PathBuf::from("banana/service"),
            PathBuf::from("kiwi/service"),
        ]
    );
}

#[test]
fn contract_every_entity_runs_every_stage_once() {
    let recorder = Recorder::new();
    let batch = entities(&["Person", "OrderItem", "Category"]);
    let dtos = build_dto_registry(&batch, &PathBuf::new());

    let result = BatchOrchestrator::new(recorder.generators())
        .run(&batch, &dtos)
        .unwrap();

    assert_eq!(recorder.calls().len(), 15);
    for entity in ["Person", "OrderItem", "Category"] {
        let stages: Vec<Stage> = recorder
            .calls_for(entity)
            .into_iter()
            .map(|c| c.stage)
            .collect();
        assert_eq!(stages, Stage::ORDERED.to_vec(), "stages for {entity}");
    }
    assert_eq!(result.artifact_count(), 21);
}

#[test]
fn contract_empty_batch_invokes_nothing() {
    let recorder = Recorder::new();
    let result = BatchOrchestrator::new(recorder.generators())
        .run(&[], &Default::default())
        .unwrap();

    assert!(result.is_empty());
    assert!(recorder.calls().is_empty());
}
