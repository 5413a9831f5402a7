// ============================================================================
// Micro-Unit Price Conversion
// Fixed-point micros (value × 1,000,000) used by ad-platform billing APIs
// ============================================================================

use super::price::format_price;
use super::vat::round_money;
use crate::numeric::{sanitize, Numeric};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Micros per whole currency unit.
pub const MICROS_PER_UNIT: i64 = 1_000_000;

/// Convert a micro-unit amount to a float price.
///
/// # Example
/// ```
/// use numfmt::currency::micro_to_price;
///
/// assert_eq!(micro_to_price(2_500_000), 2.5);
/// ```
#[inline]
pub fn micro_to_price(value: i64) -> f64 {
    value as f64 / MICROS_PER_UNIT as f64
}

/// Convert a float price to micros, rounding to the nearest integer.
///
/// # Example
/// ```
/// use numfmt::currency::price_to_micros;
///
/// assert_eq!(price_to_micros(2.5), 2_500_000);
/// ```
#[inline]
pub fn price_to_micros(value: f64) -> i64 {
    (value * MICROS_PER_UNIT as f64).round() as i64
}

/// Convert a micro-unit amount to a decimal price by way of the price
/// formatter.
///
/// This reproduces the upstream composition: the value is formatted as a
/// string with `decimals` digits and `thousand_separator`, then parsed back
/// to a float. The re-parse goes through the comma-stripping sanitizer, so
/// a separator in the rendered string does not truncate the result. The
/// parameters therefore only affect the intermediate rounding, e.g.
/// `decimals = 2` quantizes to cents.
///
/// Prefer [`micro_to_price_rounded`] when no string ever needs to exist.
///
/// # Example
/// ```
/// use numfmt::currency::micro_prices_to_decimal;
///
/// assert_eq!(micro_prices_to_decimal(2_512_345, 2, ""), 2.51);
/// assert_eq!(micro_prices_to_decimal(1_234_567_890, 2, ","), 1234.57);
/// ```
pub fn micro_prices_to_decimal(value: i64, decimals: usize, thousand_separator: &str) -> f64 {
    let rendered = format_price(micro_to_price(value), decimals, thousand_separator, "");
    sanitize(&Numeric::from(rendered)).unwrap_or(0.0)
}

/// Convert a micro-unit amount straight to a rounded float price, without
/// the string round-trip of [`micro_prices_to_decimal`].
///
/// Rounds half-up at `decimals` fractional digits using decimal arithmetic.
///
/// # Example
/// ```
/// use numfmt::currency::micro_to_price_rounded;
///
/// assert_eq!(micro_to_price_rounded(2_512_345, 2), 2.51);
/// ```
pub fn micro_to_price_rounded(value: i64, decimals: u32) -> f64 {
    let price = Decimal::from(value) / Decimal::from(MICROS_PER_UNIT);
    price
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_else(|| round_money(micro_to_price(value)))
}
