// ============================================================================
// Basic Usage Example
// ============================================================================

use numfmt::prelude::*;

fn main() {
    println!("=== numfmt Example ===\n");

    // Plain numbers, with and without grouping
    println!("format_number(1234567.891, 2, \",\") = {}", format_number(1234567.891, 2, ","));
    println!("format_number(\"1,234\", 0, \".\")    = {}", format_number("1,234", 0, "."));
    println!("format_number(\"abc\", 2, \",\")      = {}", format_number("abc", 2, ","));

    // Prices with currency symbols
    for code in ["USD", "EUR", "JPY", "BRL", "XXX"] {
        println!("format_price(1999.5, 2, \",\", {code:?}) = {}", format_price(1999.5, 2, ",", code));
    }

    // Byte sizes
    println!();
    for bytes in [500u128, 1_000, 1_024, 1_536, 1_048_576, 1_099_511_627_776] {
        println!("format_bytes({bytes}, 2) = {}", format_bytes(bytes, 2));
    }

    // Durations
    println!();
    for seconds in [0u64, 59, 3_600, 3_661, 360_000] {
        println!(
            "format_duration({seconds}) = {}  (short: {})",
            format_duration(seconds),
            format_duration_short(seconds)
        );
    }

    // VAT and percentages
    println!();
    println!("add_vat_to_price(100.0, 20.0)    = {}", add_vat_to_price(100.0, 20.0));
    println!("remove_vat_from_price(120.0, 20.0) = {}", remove_vat_from_price(120.0, 20.0));
    println!("calculate_percentage(50, 200, 0, \"\") = {}", calculate_percentage(50, 200, 0, ""));

    // Micro-unit prices (ad-platform billing)
    println!();
    println!("micro_to_price(2_500_000)  = {}", micro_to_price(2_500_000));
    println!("price_to_micros(2.5)       = {}", price_to_micros(2.5));
    println!("micro_prices_to_decimal(1_234_567_890, 2, \",\") = {}", micro_prices_to_decimal(1_234_567_890, 2, ","));
}
