//! Domain layer for used-motorcycle price estimation
//!
//! Lookup tables map pick-list labels to the numeric codes the price model
//! was trained on. A submitted [`model::FormInput`] is turned into a
//! [`model::FeatureVector`], handed to a [`predictor::PricePredictor`], and
//! the scalar output is presented as a rupiah range.

pub mod constants;
pub mod lookup;
pub mod model;
pub mod predictor;
pub mod service;

pub use lookup::LookupTable;
pub use predictor::{PricePredictor, ScriptedPredictor};
