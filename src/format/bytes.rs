// ============================================================================
// Byte-Size Humanization
// Binary-multiple rendering with digit-count unit selection
// ============================================================================

/// Unit suffixes for binary multiples of 1024.
const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count as a human-readable size.
///
/// The unit is chosen from the decimal digit count of the value,
/// `(digit_count - 1) / 3`, not from repeated division by 1024. The two
/// disagree near the 1000-vs-1024 boundaries (e.g. `1000` renders as
/// `0.98KB`, not `1000.00B`); this matches the upstream behavior and is
/// kept deliberately.
///
/// The quotient uses binary scaling (1024^factor) and is rendered with
/// `decimals` fractional digits. A factor past the end of the unit table
/// appends no suffix at all.
///
/// # Example
/// ```
/// use numfmt::format::format_bytes;
///
/// assert_eq!(format_bytes(500, 2), "500.00B");
/// assert_eq!(format_bytes(1024, 2), "1.00KB");
/// assert_eq!(format_bytes(1048576, 1), "1.0MB");
/// ```
pub fn format_bytes(bytes: u128, decimals: usize) -> String {
    let digit_count = bytes.to_string().len();
    let factor = (digit_count - 1) / 3;

    let scaled = bytes as f64 / 1024f64.powi(factor as i32);
    let unit = UNITS.get(factor).copied().unwrap_or("");

    format!("{scaled:.decimals$}{unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_counts_stay_in_bytes() {
        assert_eq!(format_bytes(0, 2), "0.00B");
        assert_eq!(format_bytes(500, 2), "500.00B");
        assert_eq!(format_bytes(999, 2), "999.00B");
    }

    #[test]
    fn test_digit_count_selects_unit() {
        // 1000 has 4 digits, so it scales into KB even though it is < 1024
        assert_eq!(format_bytes(1000, 2), "0.98KB");
        assert_eq!(format_bytes(1024, 2), "1.00KB");
        assert_eq!(format_bytes(999_999, 2), "976.56KB");
        // 7 digits puts us in MB territory
        assert_eq!(format_bytes(1_048_576, 2), "1.00MB");
    }

    #[test]
    fn test_larger_units() {
        assert_eq!(format_bytes(1_073_741_824, 2), "1.00GB");
        assert_eq!(format_bytes(1_099_511_627_776, 2), "1.00TB");
    }

    #[test]
    fn test_decimals_parameter() {
        assert_eq!(format_bytes(1536, 0), "2KB");
        assert_eq!(format_bytes(1536, 1), "1.5KB");
        assert_eq!(format_bytes(1536, 3), "1.500KB");
    }

    #[test]
    fn test_factor_past_unit_table_appends_nothing() {
        // 28 digits -> factor 9, one past the last unit (YB at index 8)
        let rendered = format_bytes(1_000_000_000_000_000_000_000_000_000u128, 2);
        assert!(!rendered.ends_with('B'), "no unit expected: {rendered}");
        assert!(rendered.ends_with(|c: char| c.is_ascii_digit()));
    }
}
