//! Currency-safe money values on scaled integers.
//!
//! Amounts are stored as integer counts of a currency's minor unit (cents,
//! fils, ...), scaled by `10^fraction`, so money math never touches floating
//! point. This crate provides:
//! - [`Money`]: an immutable amount plus currency snapshot with checked,
//!   currency-safe arithmetic and comparison
//! - Fair distribution: [`Money::split`] and [`Money::allocate`] never create
//!   or destroy a minor unit
//! - Locale-aware rendering and parsing driven by per-currency metadata
//! - A process-wide currency registry, seeded with a built-in table and
//!   extensible at runtime
//!
//! ```
//! use tender::Money;
//!
//! let price = Money::new(123_456, "USD")?;
//! assert_eq!(price.to_string(), "$1,234.56");
//!
//! let shares = price.split(3)?;
//! let total: i64 = shares.iter().map(Money::amount).sum();
//! assert_eq!(total, price.amount());
//! # Ok::<(), tender::MoneyError>(())
//! ```

pub mod arithmetic;
pub mod currency;
pub mod error;
pub mod format;
pub mod money;
pub mod parse;
pub mod serialize;

pub use arithmetic::Amount;
pub use currency::{Currency, find_currency, register_currency};
pub use error::{MoneyError, MoneyResult};
pub use format::Formatter;
pub use money::Money;

#[cfg(test)]
mod props;
