//! Error types for Crudforge
//!
//! Uses `thiserror` for library errors. Every error raised while processing
//! an entity names that entity so the caller can fix the input and rerun the
//! whole batch.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::GeneratorError;
use crate::domain::value_objects::{CollisionKind, InvalidNameReason, Stage};

/// Result type alias for Crudforge operations
pub type CrudforgeResult<T> = Result<T, CrudforgeError>;

/// Main error type for Crudforge operations
#[derive(Error, Debug)]
pub enum CrudforgeError {
    /// Entity name cannot be derived into identifiers and paths
    #[error("invalid entity name '{name}': {reason}")]
    InvalidName {
        name: String,
        reason: InvalidNameReason,
    },

    /// A stage generator failed for one entity
    #[error("failed to generate {stage} for entity '{entity}': {source}")]
    Generation {
        entity: String,
        stage: Stage,
        #[source]
        source: GeneratorError,
    },

    /// Two distinct entities derive the same identifier or path
    #[error("entities '{first}' and '{second}' both derive {kind} '{value}'")]
    NameCollision {
        kind: CollisionKind,
        value: String,
        first: String,
        second: String,
    },

    /// The same entity name is declared more than once
    #[error("entity '{name}' is declared more than once")]
    DuplicateEntity { name: String },

    /// Entity schema file could not be parsed
    #[error("failed to load entity schema {path}: {message}")]
    SchemaLoad { path: PathBuf, message: String },

    /// Entity schema file has an extension we cannot read
    #[error("unsupported schema format for {path} - expected .json, .yaml, .yml or .toml")]
    UnsupportedSchemaFormat { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Worker pool could not be created
    #[error("failed to start generation workers: {message}")]
    ThreadPool { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CrudforgeError {
    /// Name of the entity this error is about, if any
    pub fn entity(&self) -> Option<&str> {
        match self {
            CrudforgeError::InvalidName { name, .. } => Some(name),
            CrudforgeError::Generation { entity, .. } => Some(entity),
            CrudforgeError::NameCollision { second, .. } => Some(second),
            CrudforgeError::DuplicateEntity { name } => Some(name),
            _ => None,
        }
    }
}
