//! Monetary values coupling an amount with a currency snapshot.

use std::cmp::Ordering;
use std::fmt;

use crate::arithmetic::{self, Amount};
use crate::currency::{self, Currency};
use crate::error::{MoneyError, MoneyResult};
use crate::parse;

/// An immutable amount of money in a specific currency.
///
/// The amount counts minor units (cents, fils, ...) scaled by `10^fraction`
/// of the currency, so arithmetic never touches floating point. The currency
/// record is captured by value at construction: overriding the registry
/// afterwards does not change how an existing value compares or formats.
///
/// Every operation returns a new `Money`; nothing mutates in place. Binary
/// operations between different currencies fail with
/// [`MoneyError::CurrencyMismatch`] rather than coercing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Money {
    amount: Amount,
    currency: Currency,
}

impl Money {
    /// Creates a money value from minor units and a registered currency code.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] if `code` is not registered.
    pub fn new(amount: Amount, code: &str) -> MoneyResult<Self> {
        Ok(Self {
            amount,
            currency: resolve(code)?,
        })
    }

    /// Creates a money value from a major-unit float, truncating toward zero.
    ///
    /// This conversion is lossy by nature: `f64` cannot represent most
    /// decimal fractions exactly, so e.g. `1.15` in a 2-fraction currency
    /// may land at `114` minor units. Prefer [`Money::new`] or
    /// [`Money::from_string`] wherever the input is exact.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] if `code` is not registered.
    pub fn from_float_lossy(major: f64, code: &str) -> MoneyResult<Self> {
        let currency = resolve(code)?;
        let scale = 10f64.powi(currency.fraction as i32);
        Ok(Self {
            amount: (major * scale) as Amount,
            currency,
        })
    }

    /// Creates a money value by parsing a plain decimal string.
    ///
    /// Accepts only bare numeric text using the currency's decimal
    /// separator; see [`parse::parse_amount`] for the exact rules.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] if `code` is not registered,
    /// or [`MoneyError::InvalidAmount`] if `amount` does not parse.
    pub fn from_string(amount: &str, code: &str) -> MoneyResult<Self> {
        let currency = resolve(code)?;
        Ok(Self {
            amount: parse::parse_amount(amount, &currency)?,
            currency,
        })
    }

    /// Returns the raw amount in minor units.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the captured currency record.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the currency code.
    #[must_use]
    pub fn currency_code(&self) -> &str {
        &self.currency.code
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Returns true if both values carry the same currency code.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency.code == other.currency.code
    }

    /// Compares two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the codes differ; no
    /// ordering is produced across currencies.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Checks equality of two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the codes differ.
    pub fn equals(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// Checks whether `self` is strictly greater than `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the codes differ.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Checks whether `self` is greater than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the codes differ.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Checks whether `self` is strictly less than `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the codes differ.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Checks whether `self` is less than or equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the codes differ.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Returns a new value holding the absolute amount.
    #[must_use]
    pub fn absolute(&self) -> Self {
        self.with_amount(arithmetic::absolute(self.amount))
    }

    /// Returns a new value with the amount's sign flipped.
    #[must_use]
    pub fn negative(&self) -> Self {
        self.with_amount(arithmetic::negative(self.amount))
    }

    /// Returns the sum of two values of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the codes differ.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(self.with_amount(arithmetic::add(self.amount, other.amount)))
    }

    /// Returns the difference of two values of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the codes differ.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(self.with_amount(arithmetic::subtract(self.amount, other.amount)))
    }

    /// Returns a new value scaled by an integer factor.
    #[must_use]
    pub fn multiply(&self, factor: i64) -> Self {
        self.with_amount(arithmetic::multiply(self.amount, factor))
    }

    /// Returns a new value rounded to the nearest whole major unit, ties
    /// away from zero.
    #[must_use]
    pub fn round(&self) -> Self {
        self.with_amount(arithmetic::round(self.amount, self.currency.fraction))
    }

    /// Splits the value into `parties` equal-as-possible shares.
    ///
    /// Leftover units go to the first shares in order; the shares always sum
    /// back to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidSplitCount`] if `parties` is zero.
    pub fn split(&self, parties: usize) -> MoneyResult<Vec<Self>> {
        let shares = arithmetic::split(self.amount, parties)?;
        Ok(shares.into_iter().map(|a| self.with_amount(a)).collect())
    }

    /// Distributes the value across parties weighted by integer ratios.
    ///
    /// Truncation leftovers go to the first parties in ratio order; unless
    /// every ratio is zero, the shares sum back to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NoRatios`] for an empty ratio list and
    /// [`MoneyError::NegativeRatio`] for a negative ratio.
    pub fn allocate(&self, ratios: &[i64]) -> MoneyResult<Vec<Self>> {
        let shares = arithmetic::allocate(self.amount, ratios)?;
        Ok(shares.into_iter().map(|a| self.with_amount(a)).collect())
    }

    /// Renders the bare numeric amount, grapheme-free.
    #[must_use]
    pub fn formatted_amount(&self) -> String {
        self.currency.formatter().format_amount(self.amount)
    }

    /// Converts the amount to major units as a float.
    ///
    /// Lossy for very large magnitudes; see
    /// [`Formatter::to_major_units`](crate::format::Formatter::to_major_units).
    #[must_use]
    pub fn as_major_units(&self) -> f64 {
        self.currency.formatter().to_major_units(self.amount)
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.code.clone(),
                right: other.currency.code.clone(),
            })
        }
    }

    fn with_amount(&self, amount: Amount) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
        }
    }
}

/// Renders the fully templated display string, grapheme included.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.currency.formatter().format(self.amount))
    }
}

fn resolve(code: &str) -> MoneyResult<Currency> {
    currency::find_currency(code).ok_or_else(|| MoneyError::InvalidCurrency(code.to_string()))
}
