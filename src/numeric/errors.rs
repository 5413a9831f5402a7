// ============================================================================
// Numeric Errors
// Error types for numeric sanitization
// ============================================================================

use std::fmt;

/// Errors that can occur while sanitizing a numeric input.
///
/// These never escape through the public formatting functions, which degrade
/// to string fallbacks instead. They are exposed for callers that use
/// [`sanitize`](crate::numeric::sanitize) directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input does not match the numeric grammar
    /// (optional sign, digits, optional decimal point, optional exponent)
    NotNumeric,
    /// Input contained thousands separators but was still not numeric
    /// once they were stripped
    NotNumericAfterStrip,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NotNumeric => {
                write!(f, "invalid input: value does not parse as a number")
            },
            NumericError::NotNumericAfterStrip => write!(
                f,
                "invalid input: value is not numeric even after stripping separators"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric sanitization
pub type NumericResult<T> = Result<T, NumericError>;
