//! File System Schema Repository
//!
//! Implements the EntitySchemaRepository port for schema files holding
//! `{ entities: [...] }` as JSON, YAML or TOML. The format is picked from
//! the file extension.

use serde::Deserialize;
use std::path::Path;

use crate::domain::entities::Entity;
use crate::domain::ports::EntitySchemaRepository;
use crate::error::{CrudforgeError, CrudforgeResult};

/// On-disk schema document
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaFile {
    #[serde(default)]
    entities: Vec<Entity>,
}

/// Supported schema encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
    Toml,
}

impl SchemaFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parse schema text in the given format
pub fn parse_schema(content: &str, format: SchemaFormat) -> Result<Vec<Entity>, String> {
    let file: SchemaFile = match format {
        SchemaFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
        SchemaFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?,
        SchemaFormat::Toml => toml::from_str(content).map_err(|e| e.to_string())?,
    };
    Ok(file.entities)
}

/// Schema repository reading from the local file system
#[derive(Debug, Default)]
pub struct FsSchemaRepository;

impl FsSchemaRepository {
    pub fn new() -> Self {
        Self
    }
}

impl EntitySchemaRepository for FsSchemaRepository {
    fn load(&self, path: &Path) -> CrudforgeResult<Vec<Entity>> {
        let format =
            SchemaFormat::from_path(path).ok_or_else(|| CrudforgeError::UnsupportedSchemaFormat {
                path: path.to_path_buf(),
            })?;

        let content = std::fs::read_to_string(path).map_err(|e| CrudforgeError::SchemaLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        parse_schema(&content, format).map_err(|message| CrudforgeError::SchemaLoad {
            path: path.to_path_buf(),
            message,
        })
    }
}
