// ============================================================================
// Currency Module
// Symbol lookup, price formatting, VAT math and micro-unit conversion
// ============================================================================
//
// This module provides:
// - symbol_for_code: static currency code to display symbol lookup
// - format_price: symbol-prefixed fixed-point rendering
// - add_vat_to_price / remove_vat_from_price: 2-dp money math
// - micro_to_price family: ×1,000,000 fixed-point conversions for
//   ad-platform billing APIs
//
// Design principles:
// - Lookup misses resolve to "" rather than errors
// - Money rounding goes through rust_decimal, not raw f64 rounding

mod micros;
mod price;
mod symbols;
mod vat;

pub use micros::{
    micro_prices_to_decimal, micro_to_price, micro_to_price_rounded, price_to_micros,
    MICROS_PER_UNIT,
};
pub use price::format_price;
pub use symbols::symbol_for_code;
pub use vat::{add_vat_to_price, remove_vat_from_price};
