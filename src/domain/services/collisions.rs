//! Batch-wide name collision check
//!
//! Two entities that validate on their own can still derive the same
//! instance name (`Person` / `person`) or the same resource path
//! (`Person` / `People`). Generation would then emit artifacts that
//! overwrite each other, so the batch is rejected before any generator runs.

use std::collections::HashMap;

use super::naming::derive_names;
use super::validation::NameValidator;
use crate::domain::entities::Entity;
use crate::domain::value_objects::{CollisionKind, DerivedNames};
use crate::error::{CrudforgeError, CrudforgeResult};

/// Validate every entity name and ensure derived names are unique
///
/// Returns the derived names in entity order. Fails on the first invalid
/// name, duplicate declaration, or collision, naming the entities involved.
pub fn check_name_collisions(
    entities: &[Entity],
    validator: &NameValidator,
) -> CrudforgeResult<Vec<DerivedNames>> {
    let mut type_names: HashMap<String, &str> = HashMap::new();
    let mut instance_names: HashMap<String, &str> = HashMap::new();
    let mut resource_paths: HashMap<String, &str> = HashMap::new();
    let mut derived = Vec::with_capacity(entities.len());

    for entity in entities {
        let name = entity.name();
        validator.validate(name)?;
        let names = derive_names(name);

        if type_names.insert(name.to_string(), name).is_some() {
            return Err(CrudforgeError::DuplicateEntity {
                name: name.to_string(),
            });
        }

        if let Some(first) = instance_names.insert(names.instance_name().to_string(), name) {
            return Err(CrudforgeError::NameCollision {
                kind: CollisionKind::InstanceName,
                value: names.instance_name().to_string(),
                first: first.to_string(),
                second: name.to_string(),
            });
        }

        if let Some(first) = resource_paths.insert(names.resource_path().to_string(), name) {
            return Err(CrudforgeError::NameCollision {
                kind: CollisionKind::ResourcePath,
                value: names.resource_path().to_string(),
                first: first.to_string(),
                second: name.to_string(),
            });
        }

        derived.push(names);
    }

    Ok(derived)
}
