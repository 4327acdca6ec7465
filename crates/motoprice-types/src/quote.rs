//! Presented price estimate

use serde::{Deserialize, Serialize};

/// A model prediction converted to rupiah and widened into a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Model output in euro, truncated to whole euro
    pub central_eur: i64,
    /// Central estimate in rupiah
    pub central_idr: i64,
    /// Lower bound in rupiah
    pub min_idr: i64,
    /// Upper bound in rupiah
    pub max_idr: i64,
    /// Symmetric margin used for the range (0.075 = ±7.5%)
    pub margin: f64,
    /// "Rp 16.187.500 - Rp 18.812.500"
    pub range_text: String,
    /// Supplementary note naming the margin and the euro prediction
    pub note: String,
}
