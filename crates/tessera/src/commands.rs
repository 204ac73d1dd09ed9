use std::cmp::Ordering;
use std::path::PathBuf;
use std::process::ExitCode;

use log::{debug, error, warn};
use serde_json::json;
use tessera_core::config::LoaderConfig;
use tessera_core::environment::{CompiledUnit, EnvironmentStripper};
use tessera_core::version::{compare as compare_versions, SemanticVersion, Version, VersionPredicate};

use crate::error::UnitError;

pub fn compare(first: &str, second: &str) -> ExitCode {
    let (a, b) = match (SemanticVersion::parse(first), SemanticVersion::parse(second)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    let symbol = match compare_versions(&a, &b) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("{} {} {}", first, symbol, second);
    ExitCode::SUCCESS
}

pub fn matches(version: &str, predicate: &str) -> ExitCode {
    let parsed = Version::parse(version).and_then(|v| VersionPredicate::parse(predicate).map(|p| (v, p)));
    let (version, predicate) = match parsed {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    let satisfied = predicate.matches(&version);
    println!("{}", satisfied);
    if satisfied { ExitCode::SUCCESS } else { ExitCode::from(1) }
}

async fn read_unit(path: PathBuf) -> Result<(PathBuf, CompiledUnit), UnitError> {
    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(source) => return Err(UnitError::Read { path, source }),
    };
    match serde_json::from_str(&content) {
        Ok(unit) => Ok((path, unit)),
        Err(source) => Err(UnitError::Parse { path, source }),
    }
}

pub async fn strip(config: &LoaderConfig, apply: bool, units: Vec<PathBuf>) -> ExitCode {
    let apply = if apply && !config.strip {
        warn!("Stripping is disabled by configuration; printing plans only");
        false
    } else {
        apply
    };

    // Units are independent; read and analyze them concurrently.
    let env = config.environment;
    let handles: Vec<_> = units
        .into_iter()
        .map(|path| {
            tokio::spawn(async move {
                let (path, unit) = read_unit(path).await?;
                let plan = EnvironmentStripper::analyze_unit(env, &unit);
                Ok::<_, UnitError>((path, unit, plan))
            })
        })
        .collect();

    let mut failed = false;
    for handle in handles {
        let outcome = handle.await.map_err(UnitError::from).and_then(|outcome| outcome);
        let (path, unit, plan) = match outcome {
            Ok(result) => result,
            Err(e) => {
                error!("{}", e);
                eprintln!("Error: {}", e);
                failed = true;
                continue;
            }
        };

        debug!("Analyzed {} for {}", unit.name, env);
        let report = if apply {
            json!({
                "unit": path.display().to_string(),
                "excluded": plan.strip_entire_class(),
                "rewritten": unit.apply_plan(&plan),
            })
        } else {
            json!({
                "unit": path.display().to_string(),
                "name": unit.name,
                "plan": plan,
            })
        };
        println!("{}", report);
    }

    if failed { ExitCode::from(2) } else { ExitCode::SUCCESS }
}
