//! Failure contracts
//!
//! A failing entity fails the whole batch, the error names that entity, and
//! invalid names are rejected before any generator runs.

use std::path::PathBuf;

use crudforge::domain::services::{build_dto_registry, NameValidator};
use crudforge::domain::value_objects::CollisionKind;
use crudforge::{BatchOptions, BatchOrchestrator, CrudforgeError, Entity, Stage};

use crate::common::*;

fn batch(names: &[&str]) -> Vec<Entity> {
    names.iter().map(|n| Entity::new(*n)).collect()
}

#[test]
fn contract_stage_failure_fails_batch_and_names_entity() {
    for stage in Stage::ORDERED {
        let recorder = Recorder::failing("OrderItem", stage);
        let entities = batch(&["Person", "OrderItem", "Category"]);
        let dtos = build_dto_registry(&entities, &PathBuf::new());

        let err = BatchOrchestrator::new(recorder.generators())
            .run(&entities, &dtos)
            .unwrap_err();

        match &err {
            CrudforgeError::Generation {
                entity,
                stage: failed,
                ..
            } => {
                assert_eq!(entity, "OrderItem");
                assert_eq!(*failed, stage);
            }
            other => panic!("expected generation error, got {other:?}"),
        }
        assert!(err.to_string().contains("OrderItem"));
    }
}

#[test]
fn contract_failure_stops_remaining_stages_of_that_entity() {
    let recorder = Recorder::failing("OrderItem", Stage::Controller);
    let entities = batch(&["OrderItem"]);
    let dtos = build_dto_registry(&entities, &PathBuf::new());

    let _ = BatchOrchestrator::new(recorder.generators()).run(&entities, &dtos);

    let stages: Vec<Stage> = recorder
        .calls_for("OrderItem")
        .into_iter()
        .map(|c| c.stage)
        .collect();
    assert_eq!(stages, vec![Stage::Service, Stage::Controller]);
}

#[test]
fn contract_sequential_failure_is_identical() {
    let recorder = Recorder::failing("Category", Stage::Module);
    let entities = batch(&["Person", "Category"]);
    let dtos = build_dto_registry(&entities, &PathBuf::new());

    let err = BatchOrchestrator::new(recorder.generators())
        .with_options(BatchOptions::new().with_parallel(false))
        .run(&entities, &dtos)
        .unwrap_err();

    assert_eq!(err.entity(), Some("Category"));
}

#[test]
fn contract_invalid_name_runs_no_generator() {
    for name in ["", "9Lives", "Order-Item", "class"] {
        let recorder = Recorder::new();
        let entities = batch(&[name]);

        let err = BatchOrchestrator::new(recorder.generators())
            .with_options(BatchOptions::new().with_collision_check(false))
            .run(&entities, &Default::default())
            .unwrap_err();

        assert!(
            matches!(err, CrudforgeError::InvalidName { .. }),
            "{name:?}: {err}"
        );
        assert!(recorder.calls().is_empty(), "{name:?} reached a generator");
    }
}

#[test]
fn contract_configured_reserved_name_is_rejected() {
    let recorder = Recorder::new();
    let entities = batch(&["Tenant"]);

    let err = BatchOrchestrator::new(recorder.generators())
        .with_validator(NameValidator::new().with_reserved(["tenant"]))
        .run(&entities, &Default::default())
        .unwrap_err();

    assert!(matches!(err, CrudforgeError::InvalidName { .. }));
    assert!(recorder.calls().is_empty());
}

#[test]
fn contract_collisions_fail_before_generation() {
    let recorder = Recorder::new();
    let entities = batch(&["Person", "People"]);
    let dtos = build_dto_registry(&entities, &PathBuf::new());

    let err = BatchOrchestrator::new(recorder.generators())
        .run(&entities, &dtos)
        .unwrap_err();

    match err {
        CrudforgeError::NameCollision { kind, value, .. } => {
            assert_eq!(kind, CollisionKind::ResourcePath);
            assert_eq!(value, "people");
        }
        other => panic!("expected collision, got {other:?}"),
    }
    assert!(recorder.calls().is_empty());
}

#[test]
fn contract_duplicate_entity_is_rejected() {
    let recorder = Recorder::new();
    let entities = batch(&["Person", "Person"]);

    let err = BatchOrchestrator::new(recorder.generators())
        .run(&entities, &Default::default())
        .unwrap_err();

    assert!(matches!(err, CrudforgeError::DuplicateEntity { name } if name == "Person"));
}
