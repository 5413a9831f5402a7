// ============================================================================
// Numeric Module
// Input sanitization for the formatting helpers
// ============================================================================
//
// This module provides:
// - Numeric: loosely-typed scalar input (int, float, or string)
// - sanitize: validate input as a number, stripping thousands separators
// - NumericError: the tagged failure the public formatters turn into fallbacks
//
// Design principles:
// - Sanitization never panics; failures are explicit Results
// - The public formatters map failures to string fallbacks, never errors

mod errors;
mod sanitize;

pub use errors::{NumericError, NumericResult};
pub use sanitize::{sanitize, Numeric};
