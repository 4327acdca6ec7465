//! Submission handling
//!
//! One synchronous pass per submission:
//! 1. Check numeric bounds
//! 2. Resolve pick-list labels into the feature vector
//! 3. Ask the predictor for a euro price
//! 4. Present it as a rupiah range

use motoprice_domain::model::{Catalog, FormInput, YearBounds};
use motoprice_domain::service::{build_features, present};
use motoprice_domain::PricePredictor;
use motoprice_infra::ArtifactPredictor;
use motoprice_types::{PriceQuote, Result};

use crate::catalog::load_catalog;
use crate::config::Config;

/// Catalog and predictor shared by every submission of a session
pub struct PriceService<P> {
    catalog: Catalog,
    predictor: P,
    bounds: YearBounds,
    warnings: Vec<String>,
}

impl<P: PricePredictor> PriceService<P> {
    pub fn new(catalog: Catalog, predictor: P) -> Self {
        Self {
            catalog,
            predictor,
            bounds: YearBounds::current(),
            warnings: Vec::new(),
        }
    }

    pub fn with_year_bounds(mut self, bounds: YearBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub fn year_bounds(&self) -> YearBounds {
        self.bounds
    }

    /// Startup warnings (e.g. placeholder model table in use)
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Initial state of the form
    pub fn default_form(&self) -> FormInput {
        FormInput::with_defaults(&self.catalog, self.bounds)
    }

    /// Turn one completed form into a price range
    ///
    /// Failures affect this submission only; the service stays usable.
    pub fn handle_submit(&self, input: &FormInput) -> Result<PriceQuote> {
        input.validate(self.bounds)?;
        let features = build_features(input, &self.catalog)?;
        tracing::debug!(?features, "assembled feature vector");

        let prediction = self.predictor.predict(&features)?;
        let quote = present(prediction)?;
        tracing::info!(
            model = %input.make_model,
            year = input.registration_year,
            central_eur = quote.central_eur,
            range = %quote.range_text,
            "price estimated"
        );
        Ok(quote)
    }
}

impl PriceService<ArtifactPredictor> {
    /// Production service: mapping table read now, model read on first submit
    pub fn from_config(config: &Config) -> Result<Self> {
        let load = load_catalog(&config.mapping_path)?;
        let predictor = ArtifactPredictor::new(&config.model_path);
        Ok(Self::new(load.catalog, predictor).with_warnings(load.warnings))
    }
}
