//! Error types for the demos.

use std::path::PathBuf;

use nftopt::NftError;
use thiserror::Error;

/// Errors raised while configuring or running a demo.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config")]
    Json(#[from] serde_json::Error),

    #[error("unknown molecule: {0}")]
    UnknownMolecule(String),

    #[error("expected {expected} parameters, got {actual}")]
    ParameterCount { expected: usize, actual: usize },

    #[error("optimizer failed")]
    Optimizer(#[from] NftError),
}

/// Result type for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;
