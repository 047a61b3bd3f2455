use race_circuit_core::{RegistryError, ResultParseError};
use thiserror::Error;

/// Errors that can occur while loading season data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },

    #[error("Invalid race registry: {0}")]
    Registry(#[from] RegistryError),

    #[error("Bad results for {participant}: {source}")]
    Results {
        participant: String,
        source: ResultParseError,
    },

    #[error("Directory not found: {0}")]
    DirNotFound(String),
}
