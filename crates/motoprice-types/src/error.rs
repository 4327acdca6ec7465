//! Error types for motoprice

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// External resource read at a fixed, convention-based path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Vehicle-model mapping table (CSV)
    MappingTable,
    /// Serialized price model
    ModelArtifact,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::MappingTable => write!(f, "model mapping table"),
            Resource::ModelArtifact => write!(f, "model artifact"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A required resource is absent at its expected path
    #[error("{resource} not found: {}", .path.display())]
    ConfigurationMissing { resource: Resource, path: PathBuf },

    /// The model could not produce a prediction
    #[error("Prediction failed: {0}")]
    PredictionFailure(String),

    #[error("Input out of range: {0}")]
    InputOutOfRange(String),

    /// A selection that is not offered by its lookup table
    #[error("Unknown {table} choice: {label:?}")]
    UnknownChoice { table: String, label: String },

    #[error("Invalid model mapping: {0}")]
    MappingInvalid(String),
}

impl Error {
    pub fn missing(resource: Resource, path: impl Into<PathBuf>) -> Self {
        Error::ConfigurationMissing {
            resource,
            path: path.into(),
        }
    }

    /// Whether this error means the given resource is absent
    pub fn is_missing(&self, resource: Resource) -> bool {
        matches!(self, Error::ConfigurationMissing { resource: r, .. } if *r == resource)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
