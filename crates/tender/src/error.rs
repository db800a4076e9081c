//! Money error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction, comparison, and distribution.
///
/// Every variant describes caller misuse that is detectable locally; none of
/// them is retryable and none is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    // ========== Construction Errors ==========
    /// Requested currency code is not present in the registry.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Text does not parse as a signed amount for the target currency.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // ========== Operation Errors ==========
    /// A binary operation was invoked across two different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency code of the left-hand value.
        left: String,
        /// Currency code of the right-hand value.
        right: String,
    },

    /// Split requested with zero parties.
    #[error("Split count must be greater than zero, got {0}")]
    InvalidSplitCount(usize),

    /// Allocation requested with an empty ratio list.
    #[error("No ratios specified")]
    NoRatios,

    /// Allocation requested with a negative ratio.
    #[error("Negative ratio not allowed: {0}")]
    NegativeRatio(i64),
}

impl MoneyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::InvalidSplitCount(_) => "INVALID_SPLIT_COUNT",
            Self::NoRatios => "NO_RATIOS",
            Self::NegativeRatio(_) => "NEGATIVE_RATIO",
        }
    }
}
