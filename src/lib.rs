// ============================================================================
// numfmt Library
// Stateless numeric, currency, byte-size and duration formatting helpers
// ============================================================================

//! # numfmt
//!
//! A small collection of pure formatting helpers for numbers, prices,
//! byte sizes and durations.
//!
//! ## Features
//!
//! - **Forgiving input** — formatters take integers, floats, or strings
//!   (with embedded thousands separators) and echo anything non-numeric
//!   back verbatim instead of failing
//! - **Currency symbols** for ~130 ISO codes, prefixed onto formatted prices
//! - **Byte-size humanization** with binary (1024) multiples
//! - **Duration rendering** as `HH:MM:SS` or sparse `1h 2m 3s`
//! - **Money math** — VAT add/remove and micro-unit (×1,000,000)
//!   conversions, rounded with decimal arithmetic
//!
//! Every function is pure and synchronous; there is no shared mutable
//! state, so everything is safe to call from any thread.
//!
//! ## Example
//!
//! ```rust
//! use numfmt::prelude::*;
//!
//! assert_eq!(format_number(1234.5, 2, ","), "1,234.50");
//! assert_eq!(format_price(1000, 2, ",", "USD"), "$1,000.00");
//! assert_eq!(format_bytes(1024, 2), "1.00KB");
//! assert_eq!(format_duration(3661), "01:01:01");
//! assert_eq!(format_duration_short(3661), "1h 1m 1s");
//! assert_eq!(add_vat_to_price(100.0, 20.0), 120.0);
//! assert_eq!(micro_to_price(2_500_000), 2.5);
//! ```

pub mod currency;
pub mod format;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::{
        add_vat_to_price, format_price, micro_prices_to_decimal, micro_to_price,
        micro_to_price_rounded, price_to_micros, remove_vat_from_price, symbol_for_code,
        MICROS_PER_UNIT,
    };
    pub use crate::format::{
        calculate_percentage, format_bytes, format_duration, format_duration_short,
        format_number, group_digits,
    };
    pub use crate::numeric::{sanitize, Numeric, NumericError, NumericResult};
}
