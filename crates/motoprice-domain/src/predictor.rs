//! Price model seam

use std::cell::RefCell;
use std::collections::VecDeque;

use motoprice_types::{Error, Result};

use crate::model::FeatureVector;

/// A model that turns one feature row into a euro price
pub trait PricePredictor {
    /// Predict the price (EUR) for one row
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// Short description of the model, for logs and `model-info`
    fn name(&self) -> &str;
}

impl<P: PricePredictor + ?Sized> PricePredictor for Box<P> {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        (**self).predict(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Predictor returning pre-scripted outputs, recording every row it sees
///
/// Outputs are consumed in order; the last one repeats once the script runs
/// out.
#[derive(Debug)]
pub struct ScriptedPredictor {
    script: RefCell<VecDeque<std::result::Result<f64, String>>>,
    last: RefCell<Option<std::result::Result<f64, String>>>,
    calls: RefCell<Vec<FeatureVector>>,
}

impl ScriptedPredictor {
    pub fn new(script: Vec<std::result::Result<f64, String>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            last: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Always predicts `value`
    pub fn constant(value: f64) -> Self {
        Self::new(vec![Ok(value)])
    }

    /// Always fails with `message`
    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(message.to_string())])
    }

    /// Rows passed to `predict` so far
    pub fn calls(&self) -> Vec<FeatureVector> {
        self.calls.borrow().clone()
    }
}

impl PricePredictor for ScriptedPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        self.calls.borrow_mut().push(*features);

        let next = self.script.borrow_mut().pop_front();
        let outcome = match next {
            Some(outcome) => {
                *self.last.borrow_mut() = Some(outcome.clone());
                outcome
            }
            None => self
                .last
                .borrow()
                .clone()
                .unwrap_or_else(|| Err("empty prediction script".to_string())),
        };

        outcome.map_err(Error::PredictionFailure)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
