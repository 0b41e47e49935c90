//! Command implementations for the crudforge binary

mod check;
mod generate;
mod names;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use crudforge::config::Config;
use tracing::warn;

pub use check::cmd_check;
pub use generate::{cmd_generate, GenerateArgs};
pub use names::cmd_names;

/// Resolve configuration from the working directory, reporting unknown keys
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let project_root = std::env::current_dir()?;
    let (config, warnings) = Config::discover(explicit, &project_root)?;
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match warning.suggestion {
            Some(suggestion) => warn!(
                key = %warning.key,
                "unknown config key in {location} (did you mean '{suggestion}'?)"
            ),
            None => warn!(key = %warning.key, "unknown config key in {location}"),
        }
    }
    Ok(config)
}

/// Write one NDJSON line to stdout
pub(crate) fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{event}")
}
