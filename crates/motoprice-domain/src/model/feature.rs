//! Feature vector handed to the price model

use serde::{Deserialize, Serialize};

/// Column order the price model was trained on
pub const FEATURE_NAMES: [&str; 6] = ["mileage", "power", "make_model", "date", "fuel", "gear"];

/// One row of model input, fields in [`FEATURE_NAMES`] order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// km
    pub mileage: f64,
    /// hp, derived from the engine-size bracket
    pub power: f64,
    pub make_model: i64,
    /// Registration year
    pub date: i32,
    pub fuel: i64,
    pub gear: i64,
}

impl FeatureVector {
    pub fn to_row(&self) -> [f64; 6] {
        [
            self.mileage,
            self.power,
            self.make_model as f64,
            self.date as f64,
            self.fuel as f64,
            self.gear as f64,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_follows_feature_names() {
        let fv = FeatureVector {
            mileage: 132.0,
            power: 7.8125,
            make_model: 42,
            date: 2020,
            fuel: 3,
            gear: 2,
        };
        assert_eq!(fv.to_row(), [132.0, 7.8125, 42.0, 2020.0, 3.0, 2.0]);
    }

    #[test]
    fn test_serialized_field_order() {
        let fv = FeatureVector {
            mileage: 1.0,
            power: 2.0,
            make_model: 3,
            date: 4,
            fuel: 5,
            gear: 6,
        };
        let json = serde_json::to_string(&fv).unwrap();
        let positions: Vec<usize> = FEATURE_NAMES
            .iter()
            .map(|name| json.find(&format!("\"{}\"", name)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }
}
