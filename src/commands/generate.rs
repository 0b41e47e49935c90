use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crudforge::application::{BatchOrchestrator, BatchResult};
use crudforge::domain::ports::{EntitySchemaRepository, GenerationEventSink};
use crudforge::domain::services::build_dto_registry;
use crudforge::infrastructure::{
    default_generators, FsSchemaRepository, JsonEventSink, TracingEventSink,
};
use tracing::info;

use super::{emit, load_config};

/// Flags of `crudforge generate`
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub schema: PathBuf,
    pub base_dir: Option<PathBuf>,
    pub sequential: bool,
    pub threads: Option<usize>,
    pub no_collision_check: bool,
    pub print: bool,
}

pub fn cmd_generate(args: GenerateArgs, json: bool, config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config.as_deref())?;

    let base_dir = args
        .base_dir
        .clone()
        .unwrap_or_else(|| config.output.base_dir.clone());
    let mut options = config.batch_options();
    if args.sequential {
        options = options.with_parallel(false);
    }
    if let Some(threads) = args.threads {
        options = options.with_parallel(true).with_threads(threads);
    }
    if args.no_collision_check {
        options = options.with_collision_check(false);
    }

    let entities = FsSchemaRepository::new().load(&args.schema)?;
    info!(schema = %args.schema.display(), entities = entities.len(), "schema loaded");
    let dtos = build_dto_registry(&entities, &base_dir);

    let events: Arc<dyn GenerationEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(TracingEventSink)
    };

    let orchestrator = BatchOrchestrator::new(default_generators(&base_dir))
        .with_validator(config.name_validator())
        .with_events(events)
        .with_options(options);

    let result = match orchestrator.run(&entities, &dtos) {
        Ok(result) => result,
        Err(err) => {
            if json {
                let _ = emit(serde_json::json!({
                    "event": "error",
                    "command": "generate",
                    "entity": err.entity(),
                    "message": err.to_string(),
                }));
            }
            return Err(err.into());
        }
    };

    if json {
        emit(result_json(&result, args.print))?;
    } else if args.print {
        print_contents(&result)?;
    } else {
        print_manifest(&result)?;
    }
    Ok(())
}

fn result_json(result: &BatchResult, with_content: bool) -> serde_json::Value {
    let artifacts: Vec<serde_json::Value> = result
        .bundles()
        .iter()
        .flat_map(|bundle| {
            bundle.artifacts().iter().map(move |artifact| {
                let mut value = serde_json::json!({
                    "entity": bundle.entity(),
                    "path": artifact.path().display().to_string(),
                    "bytes": artifact.len(),
                    "hash": artifact.content_hash(),
                });
                if with_content {
                    value["content"] = serde_json::Value::from(artifact.content());
                }
                value
            })
        })
        .collect();

    serde_json::json!({
        "event": "result",
        "command": "generate",
        "artifact_count": result.artifact_count(),
        "artifacts": artifacts,
    })
}

fn print_manifest(result: &BatchResult) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for artifact in result.artifacts() {
        writeln!(
            out,
            "{}  {}  {}",
            artifact.path().display(),
            artifact.len(),
            artifact.content_hash()
        )?;
    }
    Ok(())
}

fn print_contents(result: &BatchResult) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for artifact in result.artifacts() {
        writeln!(out, "// ==> {}", artifact.path().display())?;
        out.write_all(artifact.content().as_bytes())?;
        if !artifact.content().ends_with('\n') {
            writeln!(out)?;
        }
    }
    Ok(())
}
