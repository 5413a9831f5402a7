// ============================================================================
// Percentage Calculation
// Guarded ratio-to-percent rendering
// ============================================================================

use crate::currency::format_price;

/// Compute `main_value` as a percentage of `divide_value` and render it.
///
/// Both operands must be strictly positive; anything else (zero or negative
/// on either side) yields the literal `"0%"` sentinel instead of a ratio.
/// The upstream defaults are `decimals = 0` with no separator.
///
/// # Example
/// ```
/// use numfmt::format::calculate_percentage;
///
/// assert_eq!(calculate_percentage(50, 200, 0, ""), "25%");
/// assert_eq!(calculate_percentage(1, 3, 2, ""), "33.33%");
/// assert_eq!(calculate_percentage(-5, 10, 0, ""), "0%");
/// ```
pub fn calculate_percentage(
    main_value: i64,
    divide_value: i64,
    decimals: usize,
    thousand_separator: &str,
) -> String {
    if main_value > 0 && divide_value > 0 {
        let ratio = main_value as f64 * 100.0 / divide_value as f64;
        format!("{}%", format_price(ratio, decimals, thousand_separator, ""))
    } else {
        "0%".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_percentage() {
        assert_eq!(calculate_percentage(50, 200, 0, ""), "25%");
        assert_eq!(calculate_percentage(1, 3, 2, ""), "33.33%");
        assert_eq!(calculate_percentage(200, 50, 0, ""), "400%");
    }

    #[test]
    fn test_zero_or_negative_operands_yield_sentinel() {
        assert_eq!(calculate_percentage(0, 100, 0, ""), "0%");
        assert_eq!(calculate_percentage(100, 0, 0, ""), "0%");
        assert_eq!(calculate_percentage(-5, 10, 0, ""), "0%");
        assert_eq!(calculate_percentage(5, -10, 0, ""), "0%");
        assert_eq!(calculate_percentage(-5, -10, 0, ""), "0%");
    }

    #[test]
    fn test_separator_applies_to_large_ratios() {
        assert_eq!(calculate_percentage(100_000, 1, 0, ","), "10,000,000%");
    }
}
