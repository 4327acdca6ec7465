//! The four lookup tables behind the form

use crate::lookup::LookupTable;

/// All pick-list tables, built once at startup and shared read-only
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Engine-size bracket → displacement (cc)
    pub engine_sizes: LookupTable,
    /// Vehicle model → model code (from the mapping file)
    pub models: LookupTable,
    pub fuels: LookupTable,
    pub gears: LookupTable,
}

impl Catalog {
    /// Combine a loaded model table with the built-in tables
    pub fn with_models(models: LookupTable) -> Self {
        Self {
            engine_sizes: LookupTable::engine_sizes(),
            models,
            fuels: LookupTable::fuels(),
            gears: LookupTable::gears(),
        }
    }
}
