// ============================================================================
// VAT Math
// Multiplicative tax add/remove with 2-decimal money rounding
// ============================================================================

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Add VAT to a net price: `price * (1 + vat_percent / 100)`, rounded to
/// two decimal places (half-up).
///
/// # Example
/// ```
/// use numfmt::currency::add_vat_to_price;
///
/// assert_eq!(add_vat_to_price(100.0, 20.0), 120.0);
/// assert_eq!(add_vat_to_price(9.99, 19.0), 11.89);
/// ```
pub fn add_vat_to_price(price: f64, vat_percent: f64) -> f64 {
    round_money(price * (1.0 + vat_percent / 100.0))
}

/// Strip VAT from a gross price: `price / (1 + vat_percent / 100)`, rounded
/// to two decimal places (half-up).
///
/// # Example
/// ```
/// use numfmt::currency::remove_vat_from_price;
///
/// assert_eq!(remove_vat_from_price(120.0, 20.0), 100.0);
/// ```
pub fn remove_vat_from_price(price: f64, vat_percent: f64) -> f64 {
    round_money(price / (1.0 + vat_percent / 100.0))
}

/// Round to two decimal places, ties away from zero.
///
/// Goes through `Decimal` so the midpoint decision is made on the decimal
/// expansion rather than the nearest binary float. Non-finite input comes
/// back unchanged.
pub(crate) fn round_money(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vat() {
        assert_eq!(add_vat_to_price(100.0, 20.0), 120.0);
        assert_eq!(add_vat_to_price(50.0, 19.0), 59.5);
        assert_eq!(add_vat_to_price(9.99, 19.0), 11.89);
    }

    #[test]
    fn test_remove_vat() {
        assert_eq!(remove_vat_from_price(120.0, 20.0), 100.0);
        assert_eq!(remove_vat_from_price(59.5, 19.0), 50.0);
        assert_eq!(remove_vat_from_price(100.0, 19.0), 84.03);
    }

    #[test]
    fn test_vat_round_trip() {
        let gross = add_vat_to_price(100.0, 20.0);
        assert_eq!(remove_vat_from_price(gross, 20.0), 100.0);
    }

    #[test]
    fn test_zero_vat_is_identity_after_rounding() {
        assert_eq!(add_vat_to_price(12.345, 0.0), 12.35);
        assert_eq!(remove_vat_from_price(12.344, 0.0), 12.34);
    }

    #[test]
    fn test_round_money_midpoints() {
        assert_eq!(round_money(2.675), 2.68);
        assert_eq!(round_money(-2.675), -2.68);
        assert_eq!(round_money(1.005), 1.01);
    }

    #[test]
    fn test_negative_price() {
        assert_eq!(add_vat_to_price(-100.0, 20.0), -120.0);
    }
}
