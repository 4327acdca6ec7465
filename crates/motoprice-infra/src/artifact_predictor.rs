//! Production predictor backed by the model artifact on disk

use std::path::PathBuf;
use std::sync::OnceLock;

use motoprice_domain::model::FeatureVector;
use motoprice_domain::PricePredictor;
use motoprice_types::{Error, Result};

use crate::artifact::{ArtifactInfo, ModelArtifact};

/// Predictor that reads its artifact on first use
///
/// A successful load is kept for the life of the predictor. A failed load is
/// not cached, so a submission after the file appears succeeds.
#[derive(Debug)]
pub struct ArtifactPredictor {
    path: PathBuf,
    name: String,
    loaded: OnceLock<(ModelArtifact, ArtifactInfo)>,
}

impl ArtifactPredictor {
    /// Lazy predictor; nothing is read until the first prediction
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: format!("artifact:{}", path.display()),
            path,
            loaded: OnceLock::new(),
        }
    }

    /// Predictor whose artifact is read and validated immediately
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let predictor = Self::new(path);
        predictor.artifact()?;
        Ok(predictor)
    }

    /// Metadata of the artifact, loading it if needed
    pub fn info(&self) -> Result<&ArtifactInfo> {
        self.artifact().map(|(_, info)| info)
    }

    fn artifact(&self) -> Result<&(ModelArtifact, ArtifactInfo)> {
        if let Some(loaded) = self.loaded.get() {
            return Ok(loaded);
        }

        let loaded = ModelArtifact::load(&self.path)?;
        tracing::info!(
            path = %self.path.display(),
            kind = %loaded.1.kind,
            sha256 = %loaded.1.sha256,
            "loaded model artifact"
        );
        Ok(self.loaded.get_or_init(|| loaded))
    }
}

impl PricePredictor for ArtifactPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        let (artifact, _) = self.artifact()?;
        let price = artifact.predict_row(&features.to_row());
        tracing::debug!(?features, price, "model prediction");

        if !price.is_finite() {
            return Err(Error::PredictionFailure(format!(
                "model returned a non-finite price: {}",
                price
            )));
        }
        Ok(price)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motoprice_types::Resource;

    const LINEAR: &str = r#"{"format_version":1,
        "feature_names":["mileage","power","make_model","date","fuel","gear"],
        "estimator":{"kind":"linear","intercept":1000.0,"coefficients":[0,0,0,0,0,0]}}"#;

    fn features() -> FeatureVector {
        FeatureVector {
            mileage: 132.0,
            power: 7.8125,
            make_model: 1,
            date: 2020,
            fuel: 3,
            gear: 2,
        }
    }

    #[test]
    fn test_lazy_until_first_predict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motormodel.json");
        let predictor = ArtifactPredictor::new(&path);

        let err = predictor.predict(&features()).unwrap_err();
        assert!(err.is_missing(Resource::ModelArtifact));

        // The file shows up later; the next submission picks it up.
        std::fs::write(&path, LINEAR).unwrap();
        assert_eq!(predictor.predict(&features()).unwrap(), 1000.0);
    }

    #[test]
    fn test_open_fails_eagerly() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ArtifactPredictor::open(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_info() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motormodel.json");
        std::fs::write(&path, LINEAR).unwrap();
        let predictor = ArtifactPredictor::open(&path).unwrap();
        assert_eq!(predictor.info().unwrap().kind, "linear");
        assert!(predictor.name().starts_with("artifact:"));
    }
}
