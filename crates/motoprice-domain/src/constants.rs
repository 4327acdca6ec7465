//! Fixed constants of the price model contract
//!
//! These values are properties of the model's training data and of the
//! published price format. They must not be re-derived or tuned.

/// Euro to rupiah exchange rate applied to every prediction
pub const EUR_TO_IDR: i64 = 17_500;

/// Symmetric margin around the central estimate (±7.5%)
pub const PRICE_MARGIN: f64 = 0.075;

/// Engine displacement (cc) per horsepower used when the model was trained
pub const CC_PER_HP: f64 = 16.0;

/// Oldest registration year offered by the form
pub const MIN_REGISTRATION_YEAR: i32 = 1990;

/// Form defaults
pub const DEFAULT_MILEAGE_KM: f64 = 132.0;
pub const DEFAULT_REGISTRATION_YEAR: i32 = 2020;

/// Conventional file names, resolved against the working directory
pub const MAPPING_FILE_NAME: &str = "model_mapping.csv";
pub const MODEL_FILE_NAME: &str = "motormodel.json";

/// Sole entry of the model table when the mapping file is absent
pub const FALLBACK_MODEL_LABEL: &str = "Harap buat file model_mapping.csv";
pub const FALLBACK_MODEL_CODE: i64 = 0;

/// Engine-size brackets and the displacement (cc) each one stands for
pub const ENGINE_SIZE_BRACKETS: &[(&str, i64)] = &[
    ("Di bawah 100 CC", 80),
    ("100 - 150 CC", 125),
    ("151 - 250 CC", 200),
    ("251 - 500 CC", 375),
    ("Di atas 500 CC", 600),
];

/// Fuel type codes
pub const FUEL_CODES: &[(&str, i64)] = &[
    ("Gasoline (Bensin)", 3),
    ("Diesel", 2),
    ("Electric (Listrik)", 5),
    ("LPG", 1),
    ("Electric/Gasoline (Hybrid)", 4),
    ("Two Stroke Gasoline (Bensin 2-Tak)", 6),
    ("Others (Lainnya)", 7),
];

/// Transmission codes
pub const GEAR_CODES: &[(&str, i64)] = &[("Manual", 1), ("Otomatis", 2), ("Semi-Otomatis", 3)];

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(table: &[(&str, i64)], label: &str) -> Option<i64> {
        table.iter().find(|(l, _)| *l == label).map(|(_, c)| *c)
    }

    #[test]
    fn test_gear_codes() {
        assert_eq!(code_of(GEAR_CODES, "Manual"), Some(1));
        assert_eq!(code_of(GEAR_CODES, "Otomatis"), Some(2));
        assert_eq!(code_of(GEAR_CODES, "Semi-Otomatis"), Some(3));
    }

    #[test]
    fn test_fuel_codes() {
        assert_eq!(code_of(FUEL_CODES, "Gasoline (Bensin)"), Some(3));
        assert_eq!(code_of(FUEL_CODES, "LPG"), Some(1));
        assert_eq!(code_of(FUEL_CODES, "Others (Lainnya)"), Some(7));
    }

    #[test]
    fn test_bracket_midpoints() {
        assert_eq!(code_of(ENGINE_SIZE_BRACKETS, "Di bawah 100 CC"), Some(80));
        assert_eq!(code_of(ENGINE_SIZE_BRACKETS, "Di atas 500 CC"), Some(600));
    }
}
