//! Euro prediction → rupiah price range
//!
//! All rounding is truncation toward zero, matching the published figures.

use motoprice_types::{Error, PriceQuote, Result};

use crate::constants::{EUR_TO_IDR, PRICE_MARGIN};

/// Present a euro prediction as a rupiah range with the fixed margin
pub fn present(prediction_eur: f64) -> Result<PriceQuote> {
    present_with(prediction_eur, EUR_TO_IDR, PRICE_MARGIN)
}

fn present_with(prediction_eur: f64, rate: i64, margin: f64) -> Result<PriceQuote> {
    if !prediction_eur.is_finite() {
        return Err(Error::PredictionFailure(format!(
            "model returned a non-finite price: {}",
            prediction_eur
        )));
    }

    let central_eur = prediction_eur.trunc() as i64;
    let out_of_range =
        || Error::PredictionFailure(format!("predicted price out of range: {}", prediction_eur));
    let central_idr = central_eur.checked_mul(rate).ok_or_else(out_of_range)?;

    let min_idr = truncate_idr(central_idr as f64 * (1.0 - margin)).ok_or_else(out_of_range)?;
    let max_idr = truncate_idr(central_idr as f64 * (1.0 + margin)).ok_or_else(out_of_range)?;

    Ok(PriceQuote {
        central_eur,
        central_idr,
        min_idr,
        max_idr,
        margin,
        range_text: format!("{} - {}", format_rupiah(min_idr), format_rupiah(max_idr)),
        note: format!(
            "Catatan: Kisaran harga ini adalah estimasi ±{}% dari harga prediksi model (€ {}).",
            (margin * 100.0) as i64,
            group_thousands(central_eur, ',')
        ),
    })
}

/// Truncate toward zero, `None` when the amount does not fit in `i64`
fn truncate_idr(amount: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    let limit = i64::MAX as f64;
    (amount.is_finite() && amount > -limit && amount < limit).then(|| amount.trunc() as i64)
}

/// "Rp 16.187.500"
pub fn format_rupiah(amount: i64) -> String {
    format!("Rp {}", group_thousands(amount, '.'))
}

/// Group digits by thousands with `separator`
pub fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_prediction() {
        let quote = present(1000.0).unwrap();
        assert_eq!(quote.central_eur, 1000);
        assert_eq!(quote.central_idr, 17_500_000);
        assert_eq!(quote.min_idr, 16_187_500);
        assert_eq!(quote.max_idr, 18_812_500);
        assert_eq!(quote.range_text, "Rp 16.187.500 - Rp 18.812.500");
    }

    #[test]
    fn test_note_text() {
        let quote = present(1000.0).unwrap();
        assert_eq!(
            quote.note,
            "Catatan: Kisaran harga ini adalah estimasi ±7% dari harga prediksi model (€ 1,000)."
        );
    }

    #[test]
    fn test_fractional_euro_truncated_first() {
        let quote = present(1234.99).unwrap();
        assert_eq!(quote.central_eur, 1234);
        assert_eq!(quote.central_idr, 21_595_000);
        assert_eq!(quote.min_idr, 19_975_375);
        assert_eq!(quote.max_idr, 23_214_625);
    }

    #[test]
    fn test_bounds_truncate_not_round() {
        // 999 € → 17.482.500 Rp; ×0.925 = 16.171.312,5 ; ×1.075 = 18.793.687,5
        let quote = present(999.0).unwrap();
        assert_eq!(quote.min_idr, 16_171_312);
        assert_eq!(quote.max_idr, 18_793_687);
    }

    #[test]
    fn test_range_is_symmetric_around_central() {
        let quote = present(2500.0).unwrap();
        assert_eq!(quote.min_idr, 40_468_750);
        assert_eq!(quote.max_idr, 47_031_250);
        assert_eq!(
            quote.central_idr - quote.min_idr,
            quote.max_idr - quote.central_idr
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(present(f64::NAN), Err(Error::PredictionFailure(_))));
        assert!(matches!(
            present(f64::INFINITY),
            Err(Error::PredictionFailure(_))
        ));
    }

    #[test]
    fn test_overflow_rejected() {
        assert!(matches!(present(1e18), Err(Error::PredictionFailure(_))));
    }

    #[test]
    fn test_upper_bound_overflow_rejected() {
        // central fits in i64 (8.75e18) but central × 1.075 does not
        assert!(matches!(present(5.0e14), Err(Error::PredictionFailure(_))));
    }

    #[test]
    fn test_negative_prediction_truncates_toward_zero() {
        let quote = present(-1000.0).unwrap();
        assert_eq!(quote.central_idr, -17_500_000);
        assert_eq!(quote.min_idr, -16_187_500);
        assert_eq!(quote.max_idr, -18_812_500);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(999, '.'), "999");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(1_234_567, ','), "1,234,567");
        assert_eq!(group_thousands(-1_234, '.'), "-1.234");
    }

    #[test]
    fn test_presentation_is_deterministic() {
        assert_eq!(present(1873.4).unwrap(), present(1873.4).unwrap());
    }
}
