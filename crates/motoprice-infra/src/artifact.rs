//! Serialized price model
//!
//! The model is stored as a JSON document naming the feature columns it was
//! trained on and the fitted estimator:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "feature_names": ["mileage", "power", "make_model", "date", "fuel", "gear"],
//!   "estimator": { "kind": "linear", "intercept": 812.0, "coefficients": [0, 0, 0, 0, 0, 0] }
//! }
//! ```
//!
//! Tree estimators (`forest`, `boosted`) use the flattened node arrays of the
//! usual tree exporters: node `i` is a leaf when `children_left[i] == -1`,
//! otherwise a row goes left when `row[feature[i]] <= threshold[i]`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use motoprice_domain::model::FEATURE_NAMES;
use motoprice_types::{Error, Resource, Result};

pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

const LEAF: i64 = -1;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported model format version {0}")]
    UnsupportedVersion(u32),

    #[error("Model expects features {found:?}, form provides {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid estimator: {0}")]
    InvalidEstimator(String),

    #[error("Invalid tree {tree}: {reason}")]
    InvalidTree { tree: usize, reason: String },
}

impl From<ArtifactError> for Error {
    fn from(err: ArtifactError) -> Self {
        Error::PredictionFailure(err.to_string())
    }
}

/// One regression tree in flattened form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl RegressionTree {
    fn validate(&self, n_features: usize) -> std::result::Result<(), String> {
        let n = self.children_left.len();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ]
        .iter()
        .any(|&len| len != n)
        {
            return Err("node arrays differ in length".to_string());
        }

        for i in 0..n {
            let (left, right) = (self.children_left[i], self.children_right[i]);
            if left == LEAF && right == LEAF {
                continue;
            }
            // Children must come after their parent, which also rules out cycles.
            for child in [left, right] {
                if child <= i as i64 || child >= n as i64 {
                    return Err(format!("node {} has out-of-order child {}", i, child));
                }
            }
            let feature = self.feature[i];
            if feature < 0 || feature >= n_features as i64 {
                return Err(format!("node {} splits on unknown feature {}", i, feature));
            }
        }
        Ok(())
    }

    fn evaluate(&self, row: &[f64]) -> f64 {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            node = if row[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        self.value[node]
    }
}

/// Fitted estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Estimator {
    /// `intercept + Σ coefficient·feature`
    Linear {
        intercept: f64,
        coefficients: Vec<f64>,
    },
    /// Mean of the trees
    Forest { trees: Vec<RegressionTree> },
    /// `init + learning_rate · Σ trees`
    Boosted {
        init: f64,
        learning_rate: f64,
        trees: Vec<RegressionTree>,
    },
}

impl Estimator {
    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::Linear { .. } => "linear",
            Estimator::Forest { .. } => "forest",
            Estimator::Boosted { .. } => "boosted",
        }
    }

    fn trees(&self) -> &[RegressionTree] {
        match self {
            Estimator::Linear { .. } => &[],
            Estimator::Forest { trees } | Estimator::Boosted { trees, .. } => trees,
        }
    }

    fn validate(&self, n_features: usize) -> std::result::Result<(), ArtifactError> {
        match self {
            Estimator::Linear { coefficients, .. } => {
                if coefficients.len() != n_features {
                    return Err(ArtifactError::InvalidEstimator(format!(
                        "{} coefficients for {} features",
                        coefficients.len(),
                        n_features
                    )));
                }
            }
            Estimator::Forest { trees } | Estimator::Boosted { trees, .. } => {
                if trees.is_empty() {
                    return Err(ArtifactError::InvalidEstimator(
                        "ensemble has no trees".to_string(),
                    ));
                }
                for (tree, t) in trees.iter().enumerate() {
                    t.validate(n_features)
                        .map_err(|reason| ArtifactError::InvalidTree { tree, reason })?;
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, row: &[f64]) -> f64 {
        match self {
            Estimator::Linear {
                intercept,
                coefficients,
            } => intercept + coefficients.iter().zip(row).map(|(c, x)| c * x).sum::<f64>(),
            Estimator::Forest { trees } => {
                trees.iter().map(|t| t.evaluate(row)).sum::<f64>() / trees.len() as f64
            }
            Estimator::Boosted {
                init,
                learning_rate,
                trees,
            } => init + learning_rate * trees.iter().map(|t| t.evaluate(row)).sum::<f64>(),
        }
    }
}

/// Deserialized and validated price model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub feature_names: Vec<String>,
    pub estimator: Estimator,
}

impl ModelArtifact {
    /// Parse and validate an artifact document
    pub fn from_json(content: &str) -> std::result::Result<Self, ArtifactError> {
        let artifact: ModelArtifact = serde_json::from_str(content)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> std::result::Result<(), ArtifactError> {
        if self.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion(self.format_version));
        }
        if self.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(ArtifactError::FeatureMismatch {
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                found: self.feature_names.clone(),
            });
        }
        self.estimator.validate(self.feature_names.len())
    }

    /// Read an artifact from disk
    ///
    /// A missing file is `ConfigurationMissing`; anything else wrong with the
    /// file is `PredictionFailure`.
    pub fn load(path: &Path) -> Result<(Self, ArtifactInfo)> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::missing(Resource::ModelArtifact, path));
            }
            Err(e) => {
                return Err(Error::PredictionFailure(format!(
                    "Failed to read model artifact {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let content = std::str::from_utf8(&bytes).map_err(|e| {
            Error::PredictionFailure(format!("Model artifact is not UTF-8: {}", e))
        })?;
        let artifact = Self::from_json(content)?;
        let info = ArtifactInfo {
            path: path.to_path_buf(),
            sha256: format!("{:x}", Sha256::digest(&bytes)),
            kind: artifact.estimator.kind().to_string(),
            tree_count: artifact.estimator.trees().len(),
            feature_names: artifact.feature_names.clone(),
        };
        Ok((artifact, info))
    }

    /// Evaluate one row in `FEATURE_NAMES` order
    pub fn predict_row(&self, row: &[f64; 6]) -> f64 {
        self.estimator.evaluate(row)
    }
}

/// Description of a loaded artifact
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactInfo {
    pub path: PathBuf,
    /// Hex SHA-256 of the artifact bytes
    pub sha256: String,
    pub kind: String,
    pub tree_count: usize,
    pub feature_names: Vec<String>,
}
