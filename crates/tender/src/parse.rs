//! Parsing decimal text into minor-unit amounts.

use crate::arithmetic::Amount;
use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult};

/// Parses a plain decimal string into minor units of `currency`.
///
/// Only bare numeric text is accepted: an optional sign, decimal digits, and
/// at most one occurrence of the currency's decimal separator. No grouping
/// separators, currency symbols, or surrounding whitespace are tolerated.
///
/// Digits after the separator beyond the currency's precision are truncated,
/// never rounded, so `"1.129"` parses to `112` minor units of a 2-fraction
/// currency. Missing fraction digits are padded with zeros: `"1.5"` parses
/// to `150`.
///
/// # Errors
///
/// Returns [`MoneyError::InvalidAmount`] when the remaining text is not a
/// valid signed integer or the scaled value does not fit the 64-bit amount
/// range.
pub fn parse_amount(text: &str, currency: &Currency) -> MoneyResult<Amount> {
    let fraction = currency.fraction as usize;
    let invalid = || MoneyError::InvalidAmount(text.to_string());

    let (integer_part, supplied) = match text.find(&currency.decimal) {
        Some(index) => {
            let after = &text[index + currency.decimal.len()..];
            let keep = after
                .char_indices()
                .nth(fraction)
                .map_or(after.len(), |(end, _)| end);
            (&text[..index], &after[..keep])
        }
        None => (text, ""),
    };

    let mut digits = String::with_capacity(integer_part.len() + fraction);
    digits.push_str(integer_part);
    digits.push_str(supplied);

    let parsed: i64 = digits.parse().map_err(|_| invalid())?;

    let missing = fraction - supplied.chars().count();
    let scale = 10i64
        .checked_pow(u32::try_from(missing).map_err(|_| invalid())?)
        .ok_or_else(invalid)?;
    parsed.checked_mul(scale).ok_or_else(invalid)
}
