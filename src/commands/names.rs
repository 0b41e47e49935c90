use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use crudforge::domain::services::derive_names;

use super::{emit, load_config};

pub fn cmd_names(names: &[String], json: bool, config: Option<PathBuf>) -> Result<()> {
    let validator = load_config(config.as_deref())?.name_validator();

    let mut derived = Vec::with_capacity(names.len());
    for name in names {
        validator.validate(name)?;
        derived.push(derive_names(name));
    }

    if json {
        for names in &derived {
            let mut event = serde_json::to_value(names)?;
            event["event"] = "names".into();
            emit(event)?;
        }
        return Ok(());
    }

    let mut out = io::stdout().lock();
    for names in &derived {
        writeln!(
            out,
            "{}  {}  {}",
            names.type_name(),
            names.instance_name(),
            names.resource_path()
        )?;
    }
    Ok(())
}
