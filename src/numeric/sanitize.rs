// ============================================================================
// Numeric Input Sanitization
// Accepts loosely-typed scalar input and validates it as a number
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A loosely-typed scalar input to the formatting functions.
///
/// Callers hand over whatever they have (an integer, a float, or a string
/// that may contain thousands separators); the formatters sanitize it and
/// fall back to echoing the original text when it is not numeric.
///
/// # Example
/// ```
/// use numfmt::numeric::{sanitize, Numeric};
///
/// assert_eq!(sanitize(&Numeric::from("1,234")), Ok(1234.0));
/// assert!(sanitize(&Numeric::from("12a")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Numeric {
    /// Integer input
    Int(i64),
    /// Floating-point input
    Float(f64),
    /// String input, possibly with embedded thousands separators
    Str(String),
}

impl Numeric {
    /// The verbatim text of the original input.
    ///
    /// This is what the formatters return when sanitization fails: integers
    /// and floats render through their natural `Display`, strings come back
    /// unchanged.
    pub fn original_text(&self) -> String {
        match self {
            Numeric::Int(v) => v.to_string(),
            Numeric::Float(v) => v.to_string(),
            Numeric::Str(s) => s.clone(),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(v) => write!(f, "{}", v),
            Numeric::Float(v) => write!(f, "{}", v),
            Numeric::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<f32> for Numeric {
    fn from(value: f32) -> Self {
        Numeric::Float(value.into())
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Str(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Numeric::Str(value)
    }
}

/// Validate a value as numeric, stripping thousands separators if needed.
///
/// Integer and float inputs pass through as-is. String input must match the
/// numeric grammar (optional sign, digits, optional decimal point, optional
/// exponent); when it does not but contains commas, the commas are removed
/// and the result is validated again.
///
/// # Errors
/// - `NotNumeric` if the text fails the grammar and has no separators
/// - `NotNumericAfterStrip` if it still fails once separators are removed
///
/// # Example
/// ```
/// use numfmt::numeric::{sanitize, Numeric};
///
/// assert_eq!(sanitize(&Numeric::from("2.5e3")), Ok(2500.0));
/// assert_eq!(sanitize(&Numeric::from("10,000.50")), Ok(10000.5));
/// assert!(sanitize(&Numeric::from("   ")).is_err());
/// ```
pub fn sanitize(value: &Numeric) -> NumericResult<f64> {
    match value {
        Numeric::Int(v) => Ok(*v as f64),
        Numeric::Float(v) => Ok(*v),
        Numeric::Str(s) => sanitize_text(s),
    }
}

fn sanitize_text(text: &str) -> NumericResult<f64> {
    let trimmed = text.trim();

    if is_numeric_text(trimmed) {
        return trimmed.parse().map_err(|_| NumericError::NotNumeric);
    }

    if trimmed.contains(',') {
        let stripped: String = trimmed.chars().filter(|&c| c != ',').collect();
        if is_numeric_text(&stripped) {
            return stripped
                .parse()
                .map_err(|_| NumericError::NotNumericAfterStrip);
        }
        return Err(NumericError::NotNumericAfterStrip);
    }

    Err(NumericError::NotNumeric)
}

/// Check a trimmed string against the numeric grammar:
/// `[+-]? digits [. digits?]? ([eE] [+-]? digits)?` with at least one
/// mantissa digit. Rejects hex, infinities and NaN spellings.
fn is_numeric_text(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let mut mantissa_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let mut exponent_digits = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return false;
        }
    }

    i == bytes.len()
}
