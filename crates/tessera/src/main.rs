mod commands;
mod error;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tessera_core::config::LoaderConfig;
use tessera_core::environment::EnvType;

/// Tessera: version and environment checks for plugin units
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two semantic versions
    Compare {
        first: String,
        second: String,
    },
    /// Check a version against a dependency predicate
    Matches {
        version: String,
        predicate: String,
    },
    /// Compute strip plans for unit descriptors (JSON)
    Strip {
        /// Target environment (client or server); overrides the config file
        #[arg(long)]
        env: Option<EnvType>,
        /// Loader configuration file (.json, .yaml, .toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the rewritten unit instead of the plan
        #[arg(long)]
        apply: bool,
        /// Unit descriptor files
        #[arg(required = true)]
        units: Vec<PathBuf>,
    },
}

fn init_logging(config: Option<&LoaderConfig>) {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        let level = config.map(LoaderConfig::level_filter).unwrap_or(log::LevelFilter::Warn);
        builder.filter_level(level);
    }
    if let Err(e) = builder.try_init() {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match args.command {
        Commands::Compare { first, second } => {
            init_logging(None);
            commands::compare(&first, &second)
        }
        Commands::Matches { version, predicate } => {
            init_logging(None);
            commands::matches(&version, &predicate)
        }
        Commands::Strip { env, config, apply, units } => {
            let loaded = match config.as_deref().map(LoaderConfig::load).transpose() {
                Ok(loaded) => loaded,
                Err(e) => {
                    init_logging(None);
                    eprintln!("Error: {}", e);
                    return ExitCode::from(2);
                }
            };
            init_logging(loaded.as_ref());

            let config = match (env, loaded) {
                (Some(env), Some(mut loaded)) => {
                    loaded.environment = env;
                    loaded
                }
                (Some(env), None) => LoaderConfig::new(env),
                (None, Some(loaded)) => loaded,
                (None, None) => {
                    eprintln!("Error: either --env or --config is required");
                    return ExitCode::from(2);
                }
            };
            commands::strip(&config, apply, units).await
        }
    }
}
