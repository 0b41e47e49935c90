//! Configuration module for Crudforge
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CRUDFORGE_*)
//! 3. Project config (./crudforge.toml, or --config)
//! 4. User config (<config_dir>/crudforge/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, GenerationConfig, NamingConfig, OutputConfig};
