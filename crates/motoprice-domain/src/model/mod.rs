//! Domain model types

pub mod catalog;
pub mod feature;
pub mod form;

pub use catalog::Catalog;
pub use feature::{FeatureVector, FEATURE_NAMES};
pub use form::{FormInput, YearBounds};
