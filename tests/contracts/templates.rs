//! Default template contracts
//!
//! Every import between generated files resolves to a file in the same
//! batch, and each resource keeps all of its files in one directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crudforge::domain::services::build_dto_registry;
use crudforge::infrastructure::repositories::parse_schema;
use crudforge::infrastructure::SchemaFormat;
use crudforge::{default_generators, BatchOrchestrator};

use crate::common::*;

/// Resolve a relative specifier found in `from` to a `.ts` path
fn resolve(from: &Path, specifier: &str) -> PathBuf {
    let mut path = from.parent().unwrap_or(Path::new("")).to_path_buf();
    let parts: Vec<&str> = specifier.split('/').collect();
    for (i, part) in parts.iter().enumerate() {
        match *part {
            "." => {}
            ".." => {
                path.pop();
            }
            file if i == parts.len() - 1 => path.push(format!("{file}.ts")),
            dir => path.push(dir),
        }
    }
    path
}

fn relative_imports(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.split("from \"").nth(1))
        .filter_map(|rest| rest.split('"').next())
        .filter(|spec| spec.starts_with('.'))
        .map(str::to_string)
        .collect()
}

#[test]
fn contract_imports_between_generated_files_resolve() {
    let entities = parse_schema(RELATED_ENTITIES_YAML, SchemaFormat::Yaml).unwrap();
    let base = Path::new("server/src");
    let dtos = build_dto_registry(&entities, base);

    let result = BatchOrchestrator::new(default_generators(base))
        .run(&entities, &dtos)
        .unwrap();

    let generated: BTreeSet<PathBuf> = result
        .artifacts()
        .map(|a| a.path().to_path_buf())
        .collect();
    let dto_files: BTreeSet<PathBuf> = entities
        .iter()
        .filter_map(|e| dtos.get(e.name()))
        .flat_map(|d| d.inputs().into_iter().chain(d.args()))
        .map(|d| d.path().to_path_buf())
        .collect();

    for artifact in result.artifacts() {
        for spec in relative_imports(artifact.content()) {
            let target = resolve(artifact.path(), &spec);
            assert!(
                generated.contains(&target) || dto_files.contains(&target),
                "{} imports {spec} which resolves to missing {}",
                artifact.path().display(),
                target.display()
            );
        }
    }
}

#[test]
fn contract_resource_files_share_one_directory() {
    let entities = parse_schema(TWO_ENTITIES_JSON, SchemaFormat::Json).unwrap();
    let base = Path::new("api");
    let dtos = build_dto_registry(&entities, base);

    let result = BatchOrchestrator::new(default_generators(base))
        .run(&entities, &dtos)
        .unwrap();

    for bundle in result.bundles() {
        let dir = base.join(crudforge::derive_names(bundle.entity()).instance_name());
        assert_eq!(bundle.len(), 7);
        for artifact in bundle.artifacts() {
            assert!(
                artifact.path().starts_with(&dir),
                "{} outside {}",
                artifact.path().display(),
                dir.display()
            );
        }
    }
}

#[test]
fn contract_dangling_lookup_fails_in_controller() {
    let entities = parse_schema(DANGLING_LOOKUP_TOML, SchemaFormat::Toml).unwrap();
    let dtos = build_dto_registry(&entities, Path::new("src"));

    let err = BatchOrchestrator::new(default_generators("src"))
        .run(&entities, &dtos)
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Invoice"), "{message}");
    assert!(message.contains("controller"), "{message}");
    assert!(message.contains("Customer"), "{message}");
}

#[test]
fn contract_each_name_is_imported_once() {
    let entities = parse_schema(SELF_REFERENCING_JSON, SchemaFormat::Json).unwrap();
    let base = Path::new("server/src");
    let dtos = build_dto_registry(&entities, base);

    let result = BatchOrchestrator::new(default_generators(base))
        .run(&entities, &dtos)
        .unwrap();

    for artifact in result.artifacts() {
        let mut names = BTreeSet::new();
        for line in artifact.content().lines().filter(|l| l.starts_with("import {")) {
            let imported = line
                .trim_start_matches("import {")
                .split('}')
                .next()
                .unwrap_or_default();
            for name in imported.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                assert!(
                    names.insert(name.to_string()),
                    "{} imports {name} twice",
                    artifact.path().display()
                );
            }
        }
    }
}

#[test]
fn contract_resolver_members_are_unique() {
    let entities = parse_schema(SELF_REFERENCING_JSON, SchemaFormat::Json).unwrap();
    let base = Path::new("server/src");
    let dtos = build_dto_registry(&entities, base);

    let result = BatchOrchestrator::new(default_generators(base))
        .run(&entities, &dtos)
        .unwrap();

    let resolvers: Vec<_> = result
        .artifacts()
        .filter(|a| a.path().to_string_lossy().ends_with(".resolver.ts"))
        .collect();
    assert_eq!(resolvers.len(), 2);

    for resolver in resolvers {
        let mut members = BTreeSet::new();
        for line in resolver.content().lines() {
            let Some(rest) = line.strip_prefix("  async ") else {
                continue;
            };
            let member = rest.split('(').next().unwrap_or_default();
            assert!(
                members.insert(member.to_string()),
                "{} declares {member} twice",
                resolver.path().display()
            );
        }
    }
}
