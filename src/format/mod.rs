// ============================================================================
// Format Module
// Fixed-point, byte-size, duration and percentage rendering
// ============================================================================
//
// This module provides:
// - format_number / group_digits: fixed-point decimals with thousands grouping
// - format_bytes: binary byte-size humanization
// - format_duration / format_duration_short: HH:MM:SS and sparse renderings
// - calculate_percentage: guarded ratio-to-percent rendering
//
// Design principles:
// - Never panic on malformed input; echo it back as a string instead
// - Pure functions over scalars, no shared state

mod bytes;
mod duration;
mod number;
mod percent;

pub use bytes::format_bytes;
pub use duration::{format_duration, format_duration_short};
pub use number::{format_number, group_digits};
pub use percent::calculate_percentage;

pub(crate) use number::render_fixed;
