// crates/tessera-core/src/tests/integration/loading.rs
#![cfg(test)]

use std::sync::Arc;

use crate::config::{ConfigFormat, LoaderConfig};
use crate::entrypoint::EntrypointTable;
use crate::environment::{
    AnnotationOccurrence, CompiledUnit, EnvType, EnvironmentStripper, MemberDecl, ModEnvironment,
};
use crate::error::{Error, Result};
use crate::version::{compare, Version, VersionPredicate};

// A candidate plugin as the metadata reader would hand it over.
struct Candidate {
    id: &'static str,
    version: &'static str,
    environment: ModEnvironment,
    depends: Vec<(&'static str, &'static str)>,
    units: Vec<CompiledUnit>,
    entrypoints: Vec<&'static str>,
}

fn renderer_unit() -> CompiledUnit {
    let mut unit = CompiledUnit::new("org/sample/lib/Renderer");
    unit.annotations.push(AnnotationOccurrence::environment_only(EnvType::Client));
    unit
}

fn block_unit() -> CompiledUnit {
    let mut unit = CompiledUnit::new("org/sample/app/LampBlock");
    unit.interfaces = vec!["org/sample/lib/Glowing".to_string()];
    unit.annotations
        .push(AnnotationOccurrence::environment_interface(EnvType::Client, "org/sample/lib/Glowing"));
    unit.methods = vec![
        MemberDecl::new("onUse", "()Z"),
        MemberDecl::new("spawnParticles", "()V").annotated(AnnotationOccurrence::environment_only(EnvType::Client)),
    ];
    unit
}

fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "samplelib",
            version: "2.3.1",
            environment: ModEnvironment::Universal,
            depends: vec![],
            units: vec![renderer_unit()],
            entrypoints: vec!["org.sample.lib.Init"],
        },
        Candidate {
            id: "sampleapp",
            version: "1.0.0-beta.2",
            environment: ModEnvironment::Universal,
            depends: vec![("samplelib", ">=2.3 <3")],
            units: vec![block_unit()],
            entrypoints: vec!["org.sample.app.Main::init"],
        },
        Candidate {
            id: "minimap",
            version: "0.9",
            environment: ModEnvironment::Client,
            depends: vec![("samplelib", "2.x")],
            units: vec![],
            entrypoints: vec![],
        },
    ]
}

type Hook = dyn Fn() -> String + Send + Sync;

fn hook(message: &'static str) -> Arc<Hook> {
    Arc::new(move || message.to_string())
}

fn entrypoints() -> EntrypointTable<Hook> {
    let mut table: EntrypointTable<Hook> = EntrypointTable::new();
    table.register_type("org.sample.lib.Init", || hook("lib ready")).unwrap();
    table.register_method("org.sample.app.Main", "init", hook("app ready"));
    table
}

struct LoadReport {
    loaded: Vec<String>,
    surviving_units: Vec<CompiledUnit>,
    messages: Vec<String>,
}

fn load(config: &LoaderConfig) -> Result<LoadReport> {
    let candidates = candidates();
    let table = entrypoints();
    let mut report = LoadReport { loaded: Vec::new(), surviving_units: Vec::new(), messages: Vec::new() };

    for candidate in candidates.iter().filter(|c| c.environment.matches(config.environment)) {
        for (dep_id, predicate) in &candidate.depends {
            let predicate = VersionPredicate::parse(predicate)?;
            let provider = candidates
                .iter()
                .find(|c| c.id == *dep_id)
                .ok_or_else(|| Error::Other(format!("missing dependency {}", dep_id)))?;
            let provided = Version::parse(provider.version)?;
            if !predicate.matches(&provided) {
                return Err(Error::Other(format!("{} needs {} {}", candidate.id, dep_id, predicate)));
            }
        }

        for unit in &candidate.units {
            let plan = EnvironmentStripper::analyze_unit(config.environment, unit);
            if plan.strip_entire_class() {
                continue;
            }
            let unit = if config.strip { unit.apply_plan(&plan) } else { Some(unit.clone()) };
            report.surviving_units.extend(unit);
        }

        for entry in table.resolve_all(candidate.entrypoints.iter().copied())? {
            report.messages.push(entry());
        }
        report.loaded.push(candidate.id.to_string());
    }
    Ok(report)
}

#[test]
fn test_server_load_strips_client_declarations() -> Result<()> {
    let config = LoaderConfig::from_str(r#"{ "environment": "server" }"#, ConfigFormat::Json)?;
    let report = load(&config)?;

    assert_eq!(report.loaded, vec!["samplelib", "sampleapp"]);
    assert_eq!(report.messages, vec!["lib ready", "app ready"]);
    // The client-only renderer is excluded and the lamp loses its client members.
    assert_eq!(report.surviving_units.len(), 1);
    let lamp = &report.surviving_units[0];
    assert!(lamp.interfaces.is_empty());
    assert_eq!(lamp.methods.len(), 1);
    assert_eq!(lamp.methods[0].id.name, "onUse");
    Ok(())
}

#[test]
fn test_client_load_keeps_everything() -> Result<()> {
    let config = LoaderConfig::new(EnvType::Client);
    let report = load(&config)?;

    assert_eq!(report.loaded, vec!["samplelib", "sampleapp", "minimap"]);
    assert_eq!(report.surviving_units, vec![renderer_unit(), block_unit()]);
    Ok(())
}

#[test]
fn test_disabled_stripping_keeps_members() -> Result<()> {
    let mut config = LoaderConfig::new(EnvType::Server);
    config.strip = false;
    let report = load(&config)?;
    assert_eq!(report.surviving_units, vec![block_unit()]);
    Ok(())
}

#[test]
fn test_versions_sort_for_selection() {
    let mut offered: Vec<Version> = ["2.3.1", "2.3.1-rc.1", "2.10.0", "2.4"]
        .iter()
        .map(|s| Version::parse(s).unwrap())
        .collect();
    offered.sort_by(|a, b| match (a.as_semantic(), b.as_semantic()) {
        (Some(a), Some(b)) => compare(a, b),
        _ => a.friendly_string().cmp(&b.friendly_string()),
    });
    let newest = offered.last().map(Version::friendly_string);
    assert_eq!(newest.as_deref(), Some("2.10.0"));
    assert_eq!(offered[0].friendly_string(), "2.3.1-rc.1");
}

#[test]
fn test_error_aggregation() {
    let err: Error = VersionPredicate::parse("").unwrap_err().into();
    assert!(err.to_string().starts_with("Version parsing error: Invalid version predicate"));

    let err: Error = entrypoints().resolve("org.sample.Missing").err().map(Error::from).unwrap();
    assert_eq!(err.to_string(), "Entrypoint error: Type 'org.sample.Missing' is not registered");
}
