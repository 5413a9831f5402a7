// ============================================================================
// Fixed-Point Number Formatting
// Decimal rendering with configurable precision and thousands grouping
// ============================================================================

use crate::numeric::{sanitize, Numeric};

/// Format a value as a fixed-point decimal with thousands grouping.
///
/// The value is sanitized first (commas stripped, numeric grammar checked).
/// If sanitization fails the original input is echoed back verbatim as a
/// string; this function never panics on malformed input.
///
/// The decimal point is always a literal `.`; `thousand_separator` is
/// inserted every three digits to the left of it. Pass `""` to disable
/// grouping. The upstream defaults are `decimals = 0` and separator `","`.
///
/// # Example
/// ```
/// use numfmt::format::format_number;
///
/// assert_eq!(format_number(1234.5, 2, ","), "1,234.50");
/// assert_eq!(format_number("1,234", 0, "."), "1.234");
/// assert_eq!(format_number("abc", 2, ","), "abc");
/// ```
pub fn format_number(value: impl Into<Numeric>, decimals: usize, thousand_separator: &str) -> String {
    let value = value.into();
    let parsed = match sanitize(&value) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!("echoing non-numeric input verbatim: {:?} ({})", value, err);
            return value.original_text();
        },
    };
    render_fixed(parsed, decimals, thousand_separator)
}

/// Render an already-sanitized float with `decimals` fractional digits and
/// the given thousands separator.
pub(crate) fn render_fixed(value: f64, decimals: usize, thousand_separator: &str) -> String {
    let fixed = format!("{value:.decimals$}");

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let grouped = group_digits(int_part, thousand_separator);
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Insert `separator` every three digits, counting from the right.
///
/// `digits` must be an unsigned run of ASCII digits (no sign, no decimal
/// point); that is what [`render_fixed`] feeds it. Exposed because callers
/// of the original helper used the raw grouping primitive directly.
///
/// # Example
/// ```
/// use numfmt::format::group_digits;
///
/// assert_eq!(group_digits("1234567", ","), "1,234,567");
/// assert_eq!(group_digits("123", ","), "123");
/// ```
pub fn group_digits(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}
