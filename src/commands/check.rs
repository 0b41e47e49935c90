use std::path::PathBuf;

use anyhow::Result;
use crudforge::domain::ports::EntitySchemaRepository;
use crudforge::domain::services::{build_dto_registry, check_name_collisions};
use crudforge::infrastructure::FsSchemaRepository;

use super::{emit, load_config};

/// Validate a schema: names, collisions, and the DTO registry
pub fn cmd_check(schema: PathBuf, json: bool, config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config.as_deref())?;

    if json {
        emit(serde_json::json!({
            "event": "start",
            "command": "check",
            "schema": schema.display().to_string(),
        }))?;
    }

    let outcome = FsSchemaRepository::new().load(&schema).and_then(|entities| {
        let names = check_name_collisions(&entities, &config.name_validator())?;
        let dtos = build_dto_registry(&entities, &config.output.base_dir);
        Ok((names, dtos.len()))
    });

    let (names, dto_count) = match outcome {
        Ok(checked) => checked,
        Err(err) => {
            if json {
                let _ = emit(serde_json::json!({
                    "event": "error",
                    "command": "check",
                    "entity": err.entity(),
                    "message": err.to_string(),
                }));
            }
            return Err(err.into());
        }
    };

    if json {
        for derived in &names {
            let mut event = serde_json::to_value(derived)?;
            event["event"] = "entity".into();
            event["command"] = "check".into();
            emit(event)?;
        }
        emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "status": "success",
            "entity_count": names.len(),
            "dto_registry_entries": dto_count,
        }))?;
    } else {
        for derived in &names {
            println!(
                "ok  {}  /{}",
                derived.type_name(),
                derived.resource_path()
            );
        }
        println!("{} entities checked, no problems found", names.len());
    }
    Ok(())
}
