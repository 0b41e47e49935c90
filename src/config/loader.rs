//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CrudforgeError, CrudforgeResult};

use super::env_validator::{closest, EnvVarValidator, MAX_SUGGESTION_DISTANCE};
use super::types::Config;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "crudforge.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CrudforgeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CrudforgeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration hierarchy
///
/// The first file found wins: the explicit path, then `crudforge.toml` in
/// `project_root`, then the user config. Environment overrides apply on top.
pub fn discover(
    explicit: Option<&Path>,
    project_root: &Path,
) -> CrudforgeResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [
            Some(project_root.join(PROJECT_CONFIG_FILE)),
            user_config_path(),
        ]
        .into_iter()
        .flatten()
        .find(|path| path.is_file()),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// User-level config file (`<config_dir>/crudforge/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("crudforge").join("config.toml"))
}

/// Apply environment variable overrides (CRUDFORGE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`
pub(super) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    const BOOLS: &[&str] = &["true", "false", "1", "0"];

    // CRUDFORGE_BASE_DIR
    if let Some(dir) = lookup("CRUDFORGE_BASE_DIR").filter(|d| !d.trim().is_empty()) {
        config.output.base_dir = PathBuf::from(dir);
    }

    // CRUDFORGE_PARALLEL
    if let Some(val) = lookup("CRUDFORGE_PARALLEL") {
        config.generation.parallel = EnvVarValidator::new("CRUDFORGE_PARALLEL", BOOLS).parse_or(
            &val,
            parse_bool,
            config.generation.parallel,
        );
    }

    // CRUDFORGE_THREADS
    if let Some(val) = lookup("CRUDFORGE_THREADS") {
        config.generation.threads =
            EnvVarValidator::new("CRUDFORGE_THREADS", &["a non-negative integer"]).parse_or(
                &val,
                |s| s.trim().parse().ok(),
                config.generation.threads,
            );
    }

    // CRUDFORGE_CHECK_COLLISIONS
    if let Some(val) = lookup("CRUDFORGE_CHECK_COLLISIONS") {
        config.generation.check_collisions =
            EnvVarValidator::new("CRUDFORGE_CHECK_COLLISIONS", BOOLS).parse_or(
                &val,
                parse_bool,
                config.generation.check_collisions,
            );
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "base_dir",
        "generation",
        "parallel",
        "threads",
        "check_collisions",
        "naming",
        "reserved",
    ];

    closest(unknown, CANDIDATES, MAX_SUGGESTION_DISTANCE).map(str::to_string)
}
