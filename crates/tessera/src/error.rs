use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn one unit descriptor file into a strip plan
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid unit descriptor {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
