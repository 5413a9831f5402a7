// ============================================================================
// Price Formatting
// Currency-symbol-prefixed fixed-point rendering
// ============================================================================

use super::symbols::symbol_for_code;
use crate::format::render_fixed;
use crate::numeric::{sanitize, Numeric};

/// Format a value as a price, prefixed with a currency symbol.
///
/// Sanitization and fallback behave exactly as in
/// [`format_number`](crate::format::format_number): non-numeric input is
/// echoed back verbatim. On success the symbol resolved from
/// `currency_code` is prepended with no space; an empty or unknown code
/// means no prefix. The upstream defaults are `decimals = 2`, no separator,
/// no currency code.
///
/// # Example
/// ```
/// use numfmt::currency::format_price;
///
/// assert_eq!(format_price(1000, 2, ",", "USD"), "$1,000.00");
/// assert_eq!(format_price(19.99, 2, "", "EUR"), "€19.99");
/// assert_eq!(format_price("n/a", 2, "", "USD"), "n/a");
/// ```
pub fn format_price(
    value: impl Into<Numeric>,
    decimals: usize,
    thousand_separator: &str,
    currency_code: &str,
) -> String {
    let value = value.into();
    let parsed = match sanitize(&value) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!("echoing non-numeric price verbatim: {:?} ({})", value, err);
            return value.original_text();
        },
    };

    let symbol = if currency_code.is_empty() {
        ""
    } else {
        symbol_for_code(currency_code)
    };
    format!(
        "{symbol}{}",
        render_fixed(parsed, decimals, thousand_separator)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_with_currency() {
        assert_eq!(format_price(1000, 2, ",", "USD"), "$1,000.00");
        assert_eq!(format_price(19.99, 2, "", "EUR"), "€19.99");
        assert_eq!(format_price(5000, 0, ",", "JPY"), "¥5,000");
    }

    #[test]
    fn test_format_price_without_currency() {
        assert_eq!(format_price(1000, 2, "", ""), "1000.00");
        assert_eq!(format_price(1000, 2, ",", ""), "1,000.00");
    }

    #[test]
    fn test_format_price_unknown_code_has_no_prefix() {
        assert_eq!(format_price(10, 2, "", "XXX"), "10.00");
    }

    #[test]
    fn test_format_price_fallback_echo() {
        assert_eq!(format_price("n/a", 2, "", "USD"), "n/a");
        assert_eq!(format_price("abc", 2, ",", ""), "abc");
    }

    #[test]
    fn test_format_price_string_input() {
        assert_eq!(format_price("1,234.567", 2, ",", "GBP"), "£1,234.57");
    }

    #[test]
    fn test_format_price_negative() {
        // Symbol lands before the sign, matching the upstream concatenation
        assert_eq!(format_price(-5, 2, "", "USD"), "$-5.00");
    }
}
