//! Raw form input collected from the user

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use motoprice_types::{Error, Result};

use crate::constants::{DEFAULT_MILEAGE_KM, DEFAULT_REGISTRATION_YEAR, MIN_REGISTRATION_YEAR};
use crate::model::Catalog;

/// Accepted registration years, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    /// [1990, current calendar year]
    pub fn current() -> Self {
        Self::ending(chrono::Local::now().year())
    }

    pub fn ending(max: i32) -> Self {
        Self {
            min: MIN_REGISTRATION_YEAR,
            max,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.min, self.max.max(self.min))
    }
}

/// One submission of the price form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    /// Engine-size bracket label (e.g. "100 - 150 CC")
    pub engine_size: String,
    /// Odometer reading in km
    pub mileage_km: f64,
    pub registration_year: i32,
    /// Vehicle model label from the mapping table
    pub make_model: String,
    pub fuel: String,
    pub gear: String,
}

impl FormInput {
    /// Initial form state: first choice of every table and the default numbers
    pub fn with_defaults(catalog: &Catalog, bounds: YearBounds) -> Self {
        let first = |table: &crate::LookupTable| table.first_label().unwrap_or_default().to_string();
        Self {
            engine_size: first(&catalog.engine_sizes),
            mileage_km: DEFAULT_MILEAGE_KM,
            registration_year: bounds.clamp(DEFAULT_REGISTRATION_YEAR),
            make_model: first(&catalog.models),
            fuel: first(&catalog.fuels),
            gear: first(&catalog.gears),
        }
    }

    /// Check the numeric fields against their bounds
    pub fn validate(&self, bounds: YearBounds) -> Result<()> {
        if !self.mileage_km.is_finite() || self.mileage_km < 0.0 {
            return Err(Error::InputOutOfRange(format!(
                "mileage must be a non-negative number of km, got {}",
                self.mileage_km
            )));
        }
        if !bounds.contains(self.registration_year) {
            return Err(Error::InputOutOfRange(format!(
                "registration year must be between {} and {}, got {}",
                bounds.min, bounds.max, self.registration_year
            )));
        }
        Ok(())
    }
}
