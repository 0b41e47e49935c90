//! Property tests for batch orchestration.

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;

use crudforge::domain::services::build_dto_registry;
use crudforge::{BatchOptions, BatchOrchestrator, Entity};

use crate::common::Recorder;

/// Distinct single-word names
fn distinct_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-z]{3,10}", 0..12).prop_map(|set| {
        set.into_iter()
            .map(|w| format!("X{w}"))
            .collect::<Vec<_>>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Result length is the sum of bundle lengths, seven per entity.
    #[test]
    fn property_result_length(names in distinct_names()) {
        let entities: Vec<Entity> = names.iter().map(Entity::new).collect();
        let dtos = build_dto_registry(&entities, &PathBuf::new());

        let result = BatchOrchestrator::new(Recorder::new().generators())
            .with_options(BatchOptions::new().with_collision_check(false))
            .run(&entities, &dtos)
            .unwrap();

        let sum: usize = result.bundles().iter().map(|b| b.len()).sum();
        prop_assert_eq!(result.artifact_count(), sum);
        prop_assert_eq!(sum, entities.len() * 7);
    }

    /// PROPERTY: Bundles follow input order whatever the worker count.
    #[test]
    fn property_order_independent_of_workers(
        names in distinct_names(),
        threads in 1usize..8,
    ) {
        let entities: Vec<Entity> = names.iter().map(Entity::new).collect();
        let dtos = build_dto_registry(&entities, &PathBuf::new());

        let parallel = BatchOrchestrator::new(Recorder::new().generators())
            .with_options(BatchOptions::new().with_threads(threads).with_collision_check(false))
            .run(&entities, &dtos)
            .unwrap();
        let sequential = BatchOrchestrator::new(Recorder::new().generators())
            .with_options(BatchOptions::new().with_parallel(false).with_collision_check(false))
            .run(&entities, &dtos)
            .unwrap();

        let order: Vec<&str> = parallel.bundles().iter().map(|b| b.entity()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(order, expected);
        prop_assert_eq!(parallel, sequential);
    }

    /// PROPERTY: Distinct entities never produce the same artifact path.
    #[test]
    fn property_paths_are_unique(names in distinct_names()) {
        let entities: Vec<Entity> = names.iter().map(Entity::new).collect();
        let dtos = build_dto_registry(&entities, &PathBuf::new());

        let result = BatchOrchestrator::new(crudforge::default_generators("src"))
            .with_options(BatchOptions::new().with_collision_check(false))
            .run(&entities, &dtos)
            .unwrap();

        let unique: BTreeSet<_> = result.artifacts().map(|a| a.path().to_path_buf()).collect();
        prop_assert_eq!(unique.len(), result.artifact_count());
    }
}
