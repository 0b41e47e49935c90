//! Default DTO registry construction
//!
//! Builds the transfer-object set every entity gets: the entity DTO, the
//! HTTP inputs, and the GraphQL argument types. Each lives under
//! `<base>/<instanceName>/base/<DtoName>.ts`.

use std::path::Path;

use super::naming::{derive_names, resource_dir};
use crate::domain::entities::{DtoDefinition, DtoRegistry, Entity, EntityDtos};

/// Build the DTO definitions for one entity type name
pub fn entity_dtos(entity_type: &str, base_dir: &Path) -> EntityDtos {
    let names = derive_names(entity_type);
    let dir = resource_dir(base_dir, &names).join("base");
    let def = |name: String| {
        let path = dir.join(format!("{name}.ts"));
        DtoDefinition::new(name, path)
    };
    let t = names.type_name();

    EntityDtos {
        entity: def(t.to_string()),
        create_input: def(format!("{t}CreateInput")),
        update_input: def(format!("{t}UpdateInput")),
        where_input: def(format!("{t}WhereInput")),
        where_unique_input: def(format!("{t}WhereUniqueInput")),
        find_many_args: def(format!("{t}FindManyArgs")),
        find_one_args: def(format!("{t}FindUniqueArgs")),
        create_args: def(format!("Create{t}Args")),
        update_args: def(format!("Update{t}Args")),
        delete_args: def(format!("Delete{t}Args")),
    }
}

/// Build the default registry for a batch of entities
pub fn build_dto_registry(entities: &[Entity], base_dir: &Path) -> DtoRegistry {
    let mut registry = DtoRegistry::new();
    for entity in entities {
        registry.insert(entity.name(), entity_dtos(entity.name(), base_dir));
    }
    registry
}
