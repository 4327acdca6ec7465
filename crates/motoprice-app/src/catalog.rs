//! Startup loading of the pick-list tables

use std::path::Path;

use motoprice_domain::model::Catalog;
use motoprice_domain::LookupTable;
use motoprice_infra::load_model_table;
use motoprice_types::{Resource, Result};

use crate::messages::fallback_warning;

/// Catalog plus any warnings to show the user
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub warnings: Vec<String>,
}

/// Build the catalog from the mapping file at `mapping_path`
///
/// A missing file falls back to the single placeholder model with a warning.
/// A file that exists but is malformed (duplicates, bad codes) is an error.
pub fn load_catalog(mapping_path: &Path) -> Result<CatalogLoad> {
    match load_model_table(mapping_path) {
        Ok(models) => Ok(CatalogLoad {
            catalog: Catalog::with_models(models),
            warnings: Vec::new(),
        }),
        Err(e) if e.is_missing(Resource::MappingTable) => {
            tracing::warn!(
                path = %mapping_path.display(),
                "model mapping not found, using placeholder table"
            );
            Ok(CatalogLoad {
                catalog: Catalog::with_models(LookupTable::fallback_models()),
                warnings: vec![fallback_warning(mapping_path)],
            })
        }
        Err(e) => Err(e),
    }
}
