//! Application service layer - config, catalog loading, submission handling

pub mod catalog;
pub mod config;
pub mod messages;
pub mod service;

pub use catalog::{load_catalog, CatalogLoad};
pub use config::Config;
pub use service::PriceService;
