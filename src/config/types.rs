//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::BatchOptions;
use crate::domain::services::NameValidator;
use crate::error::CrudforgeResult;

use super::loader::{self, ConfigWarning};

/// Where generated artifact paths are rooted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
        }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("server/src")
}

/// Batch generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Run entity pipelines concurrently
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Worker threads; 0 uses the global rayon pool
    #[serde(default)]
    pub threads: usize,

    /// Reject batches where two entities derive the same names
    #[serde(default = "default_true")]
    pub check_collisions: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: 0,
            check_collisions: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Entity naming rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NamingConfig {
    /// Names rejected on top of the built-in reserved words
    #[serde(default)]
    pub reserved: Vec<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub naming: NamingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CrudforgeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CrudforgeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, project config, user config, or defaults,
    /// then apply environment overrides
    pub fn discover(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> CrudforgeResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, project_root)
    }

    /// Apply environment variable overrides (CRUDFORGE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Batch options described by this configuration
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions::new()
            .with_parallel(self.generation.parallel)
            .with_threads(self.generation.threads)
            .with_collision_check(self.generation.check_collisions)
    }

    /// Name validator including the configured reserved names
    pub fn name_validator(&self) -> NameValidator {
        NameValidator::new().with_reserved(self.naming.reserved.iter())
    }
}
