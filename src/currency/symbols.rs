// ============================================================================
// Currency Symbol Table
// Static code-to-symbol lookup for price formatting
// ============================================================================

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The symbol table as declared upstream, in declaration order.
///
/// Several codes appear twice with different symbols; the table is folded
/// into [`SYMBOLS`] in order, so the later entry wins. Keep the order and
/// the duplicates intact — deduplicating the literal would change which
/// symbol a handful of codes resolve to.
pub(crate) const SYMBOL_TABLE: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("AUD", "A$"),
    ("CAD", "C$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("SEK", "kr"),
    ("NZD", "NZ$"),
    ("MXN", "$"),
    ("SGD", "S$"),
    ("HKD", "HK$"),
    ("NOK", "kr"),
    ("KRW", "₩"),
    ("TRY", "₺"),
    ("RUB", "₽"),
    ("INR", "₹"),
    ("BRL", "R$"),
    ("ZAR", "R"),
    ("PHP", "₱"),
    ("PLN", "zł"),
    ("IDR", "Rp"),
    ("THB", "฿"),
    ("VND", "₫"),
    ("MYR", "RM"),
    ("CZK", "Kč"),
    ("HUF", "Ft"),
    ("ILS", "₪"),
    ("DKK", "kr"),
    ("CLP", "$"),
    ("COP", "$"),
    ("SAR", "﷼"),
    ("AED", "د.إ"),
    ("TWD", "NT$"),
    ("ARS", "$"),
    ("EGP", "£"),
    ("NGN", "₦"),
    ("PKR", "₨"),
    ("BDT", "৳"),
    ("LKR", "₨"),
    ("KZT", "₸"),
    ("QAR", "﷼"),
    ("KWD", "د.ك"),
    ("OMR", "ر.ع."),
    ("JOD", "د.ا"),
    ("BHD", "ب.د"),
    ("DZD", "دج"),
    ("MAD", "د.م."),
    ("TND", "د.ت"),
    ("PEN", "S/"),
    ("UAH", "₴"),
    ("GHS", "₵"),
    ("KES", "KSh"),
    ("TZS", "TSh"),
    ("UGX", "USh"),
    ("XAF", "FCFA"),
    ("XOF", "CFA"),
    ("XPF", "CFP"),
    ("RWF", "FRw"),
    ("BWP", "P"),
    ("ZMW", "ZK"),
    ("MUR", "₨"),
    ("MZN", "MT"),
    ("ALL", "L"),
    ("AMD", "֏"),
    ("AZN", "₼"),
    ("BYN", "Br"),
    ("GEL", "₾"),
    ("KGS", "сом"),
    ("MDL", "L"),
    ("MKD", "ден"),
    ("TJS", "ЅМ"),
    ("UZS", "so'm"),
    ("AFN", "؋"),
    ("IQD", "ع.د"),
    ("LYD", "ل.د"),
    ("SYP", "£"),
    ("YER", "﷼"),
    ("ARS", "AR$"),
    ("AUD", "$"),
    ("BGN", "лв"),
    ("BND", "$"),
    ("BOB", "Bs"),
    ("BRL", "R$"),
    ("CAD", "$"),
    ("CHF", "Fr"),
    ("CLP", "CL$"),
    ("CNY", "¥"),
    ("COP", "$"),
    ("CSD", "CSD"),
    ("CZK", "Kč"),
    ("DEM", "DM"),
    ("DKK", "kr"),
    ("EEK", "KR"),
    ("EGP", "£"),
    ("EUR", "€"),
    ("FJD", "$"),
    ("GBP", "£"),
    ("HKD", "$"),
    ("HRK", "kr"),
    ("HUF", "Ft"),
    ("IDR", "Rp"),
    ("ILS", "₪"),
    ("INR", "Rs"),
    ("JOD", "د.ا"),
    ("JPY", "¥"),
    ("KES", "Sh"),
    ("KRW", "₩"),
    ("LKR", "ரூ"),
    ("LTL", "Lt"),
    ("MAD", ".د.م"),
    ("MTL", "Lm"),
    ("MXN", "$"),
    ("MYR", "RM"),
    ("NOK", "kr"),
    ("NZD", "$"),
    ("PEN", "S/."),
    ("PHP", "₱"),
    ("PKR", "₨"),
    ("PLN", "zł"),
    ("ROL", "leu"),
    ("RON", "RON"),
    ("RSD", "RSD"),
    ("RUB", "р."),
    ("SAR", "ر.س"),
    ("SEK", "kr"),
    ("SGD", "$"),
    ("SIT", "St"),
    ("SKK", "Sk"),
    ("THB", "฿"),
    ("TND", "د.ت"),
    ("TRL", "₺"),
    ("TRY", "₺"),
    ("TWD", "$"),
    ("UAH", "₴"),
    ("USD", "$"),
    ("UYU", "$U"),
    ("VEB", "Bs"),
    ("VEF", "Bs"),
    ("VND", "₫"),
    ("ZAR", "R"),
    ("AED", "AED"),
    ("CRC", "₡"),
    ("QAR", "QR"),
    ("KWD", "KD"),
];

/// The effective lookup map, folded from [`SYMBOL_TABLE`] in declaration
/// order (last write wins for duplicate codes).
static SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(SYMBOL_TABLE.len());
    for &(code, symbol) in SYMBOL_TABLE {
        map.insert(code, symbol);
    }
    map
});

/// Look up the display symbol for an uppercase three-letter currency code.
///
/// Returns `""` for unknown codes.
///
/// # Example
/// ```
/// use numfmt::currency::symbol_for_code;
///
/// assert_eq!(symbol_for_code("EUR"), "€");
/// assert_eq!(symbol_for_code("XXX"), "");
/// ```
pub fn symbol_for_code(code: &str) -> &'static str {
    SYMBOLS.get(code).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(symbol_for_code("USD"), "$");
        assert_eq!(symbol_for_code("EUR"), "€");
        assert_eq!(symbol_for_code("GBP"), "£");
        assert_eq!(symbol_for_code("JPY"), "¥");
        assert_eq!(symbol_for_code("BRL"), "R$");
    }

    #[test]
    fn test_unknown_code_is_empty() {
        assert_eq!(symbol_for_code("XXX"), "");
        assert_eq!(symbol_for_code(""), "");
        assert_eq!(symbol_for_code("usd"), ""); // lookup is case-sensitive
    }

    #[test]
    fn test_duplicate_codes_resolve_to_last_entry() {
        // These codes appear twice in the table; the second symbol wins.
        assert_eq!(symbol_for_code("CHF"), "Fr");
        assert_eq!(symbol_for_code("RUB"), "р.");
        assert_eq!(symbol_for_code("INR"), "Rs");
        assert_eq!(symbol_for_code("ARS"), "AR$");
        assert_eq!(symbol_for_code("AUD"), "$");
        assert_eq!(symbol_for_code("CAD"), "$");
        assert_eq!(symbol_for_code("CLP"), "CL$");
        assert_eq!(symbol_for_code("NZD"), "$");
        assert_eq!(symbol_for_code("SGD"), "$");
        assert_eq!(symbol_for_code("HKD"), "$");
        assert_eq!(symbol_for_code("TWD"), "$");
        assert_eq!(symbol_for_code("AED"), "AED");
        assert_eq!(symbol_for_code("QAR"), "QR");
        assert_eq!(symbol_for_code("KWD"), "KD");
        assert_eq!(symbol_for_code("PEN"), "S/.");
        assert_eq!(symbol_for_code("KES"), "Sh");
        assert_eq!(symbol_for_code("SAR"), "ر.س");
        assert_eq!(symbol_for_code("MAD"), ".د.م");
        assert_eq!(symbol_for_code("LKR"), "ரூ");
    }

    #[test]
    fn test_single_occurrence_codes_survive_folding() {
        assert_eq!(symbol_for_code("KZT"), "₸");
        assert_eq!(symbol_for_code("GHS"), "₵");
        assert_eq!(symbol_for_code("UZS"), "so'm");
        assert_eq!(symbol_for_code("CRC"), "₡");
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(SYMBOL_TABLE.len(), 146);
        // Folding drops the duplicate declarations
        assert!(SYMBOLS.len() < SYMBOL_TABLE.len());
    }
}
