//! Built-in currency table.
//!
//! Fraction digits follow ISO 4217; graphemes, separators, and templates
//! follow common display practice for each currency. The table only seeds
//! the registry - any entry can be overridden at runtime.

use super::Currency;

/// Returns the built-in currency definitions used to seed the registry.
#[rustfmt::skip]
pub(super) fn builtin_currencies() -> Vec<Currency> {
    vec![
        Currency::new("AED", ".\u{62f}.\u{625}", "1 $", ".", ",", 2),
        Currency::new("ARS", "$", "$1", ",", ".", 2),
        Currency::new("AUD", "A$", "$1", ".", ",", 2),
        Currency::new("BGN", "\u{43b}\u{432}", "1 $", ",", ".", 2),
        Currency::new("BHD", ".\u{62f}.\u{628}", "1 $", ".", ",", 3),
        Currency::new("BRL", "R$", "$1", ",", ".", 2),
        Currency::new("CAD", "CA$", "$1", ".", ",", 2),
        Currency::new("CHF", "CHF", "1 $", ".", "'", 2),
        Currency::new("CLP", "$", "$1", ",", ".", 0),
        Currency::new("CNY", "\u{5143}", "1 $", ".", ",", 2),
        Currency::new("COP", "$", "$1", ",", ".", 2),
        Currency::new("CZK", "K\u{10d}", "1 $", ",", ".", 2),
        Currency::new("DKK", "kr", "1 $", ",", ".", 2),
        Currency::new("EGP", "E\u{a3}", "$ 1", ".", ",", 2),
        Currency::new("EUR", "\u{20ac}", "$1", ".", ",", 2),
        Currency::new("GBP", "\u{a3}", "$1", ".", ",", 2),
        Currency::new("HKD", "HK$", "$1", ".", ",", 2),
        Currency::new("HUF", "Ft", "1 $", ",", ".", 0),
        Currency::new("IDR", "Rp", "$ 1", ",", ".", 2),
        Currency::new("ILS", "\u{20aa}", "$ 1", ".", ",", 2),
        Currency::new("INR", "\u{20b9}", "$1", ".", ",", 2),
        Currency::new("IQD", ".\u{62f}.\u{639}", "1 $", ".", ",", 3),
        Currency::new("ISK", "kr", "1 $", ",", ".", 0),
        Currency::new("JPY", "\u{a5}", "$1", ".", ",", 0),
        Currency::new("KES", "KSh", "$ 1", ".", ",", 2),
        Currency::new("KRW", "\u{20a9}", "$1", ".", ",", 0),
        Currency::new("KWD", ".\u{62f}.\u{643}", "1 $", ".", ",", 3),
        Currency::new("LKR", "\u{20a8}", "$ 1", ".", ",", 2),
        Currency::new("MAD", ".\u{62f}.\u{645}", "1 $", ".", ",", 2),
        Currency::new("MXN", "$", "$1", ".", ",", 2),
        Currency::new("MYR", "RM", "$1", ".", ",", 2),
        Currency::new("NGN", "\u{20a6}", "$1", ".", ",", 2),
        Currency::new("NOK", "kr", "1 $", ",", ".", 2),
        Currency::new("NZD", "NZ$", "$1", ".", ",", 2),
        Currency::new("OMR", "\u{fdfc}", "1 $", ".", ",", 3),
        Currency::new("PEN", "S/", "$ 1", ".", ",", 2),
        Currency::new("PHP", "\u{20b1}", "$1", ".", ",", 2),
        Currency::new("PKR", "\u{20a8}", "$ 1", ".", ",", 2),
        Currency::new("PLN", "z\u{142}", "1 $", ",", " ", 2),
        Currency::new("QAR", "\u{fdfc}", "1 $", ".", ",", 2),
        Currency::new("RON", "lei", "1 $", ",", ".", 2),
        Currency::new("RSD", "din", "1 $", ",", ".", 2),
        Currency::new("RUB", "\u{20bd}", "1 $", ",", " ", 2),
        Currency::new("SAR", "\u{fdfc}", "1 $", ".", ",", 2),
        Currency::new("SEK", "kr", "1 $", ",", " ", 2),
        Currency::new("SGD", "S$", "$1", ".", ",", 2),
        Currency::new("THB", "\u{e3f}", "$1", ".", ",", 2),
        Currency::new("TND", ".\u{62f}.\u{62a}", "1 $", ",", ".", 3),
        Currency::new("TRY", "\u{20ba}", "$1", ",", ".", 2),
        Currency::new("TWD", "NT$", "$1", ".", ",", 2),
        Currency::new("UAH", "\u{20b4}", "1 $", ",", ".", 2),
        Currency::new("USD", "$", "$1", ".", ",", 2),
        Currency::new("UYU", "$U", "$1", ",", ".", 2),
        Currency::new("VND", "\u{20ab}", "1 $", ",", ".", 0),
        Currency::new("ZAR", "R", "$1", ".", ",", 2),
    ]
}
