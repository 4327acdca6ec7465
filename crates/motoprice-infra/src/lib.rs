//! Infrastructure layer - file-backed resources
//!
//! Reads the vehicle-model mapping CSV and the serialized price model.

pub mod artifact;
pub mod artifact_predictor;
pub mod mapping_loader;

pub use artifact::{ArtifactInfo, ModelArtifact};
pub use artifact_predictor::ArtifactPredictor;
pub use mapping_loader::{load_model_table, parse_model_table};
