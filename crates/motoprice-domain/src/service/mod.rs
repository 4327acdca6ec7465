//! Domain services

pub mod feature_builder;
pub mod price_presenter;

pub use feature_builder::{build_features, cc_to_hp};
pub use price_presenter::{format_rupiah, group_thousands, present};
