//! DTO registry - transfer-object definitions per entity type
//!
//! The registry is supplied from outside the pipeline and only ever read.
//! Generators look up DTO type names and file paths here so they can emit
//! imports for them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// One data-transfer-object type and the file that declares it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DtoDefinition {
    name: String,
    path: PathBuf,
}

impl DtoDefinition {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Type name of the DTO (`PersonCreateInput`)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The DTOs generated for a single entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDtos {
    pub entity: DtoDefinition,
    pub create_input: DtoDefinition,
    pub update_input: DtoDefinition,
    pub where_input: DtoDefinition,
    pub where_unique_input: DtoDefinition,
    pub find_many_args: DtoDefinition,
    pub find_one_args: DtoDefinition,
    pub create_args: DtoDefinition,
    pub update_args: DtoDefinition,
    pub delete_args: DtoDefinition,
}

impl EntityDtos {
    /// Input DTOs used by HTTP controllers
    pub fn inputs(&self) -> [&DtoDefinition; 5] {
        [
            &self.entity,
            &self.create_input,
            &self.update_input,
            &self.where_input,
            &self.where_unique_input,
        ]
    }

    /// Argument DTOs used by GraphQL resolvers
    pub fn args(&self) -> [&DtoDefinition; 5] {
        [
            &self.find_many_args,
            &self.find_one_args,
            &self.create_args,
            &self.update_args,
            &self.delete_args,
        ]
    }
}

/// Entity type name → DTO definitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DtoRegistry {
    entries: BTreeMap<String, EntityDtos>,
}

impl DtoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the DTOs of an entity, replacing any previous entry
    pub fn insert(&mut self, type_name: impl Into<String>, dtos: EntityDtos) {
        self.entries.insert(type_name.into(), dtos);
    }

    pub fn get(&self, type_name: &str) -> Option<&EntityDtos> {
        self.entries.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
