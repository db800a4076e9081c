//! Currency metadata and the process-wide currency registry.
//!
//! A [`Currency`] bundles everything the formatter and parser need to know
//! about one currency: its code, display symbol, layout template, separators,
//! and minor-unit precision. Definitions live in a registry seeded with the
//! built-in table and extensible at runtime; lookups hand out owned
//! snapshots, so a later override never changes values constructed earlier.

mod iso;
mod registry;

pub use registry::{find_currency, register_currency};

use serde::{Deserialize, Serialize};

use crate::format::Formatter;

/// Immutable description of a currency's code and display conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Unique identifier, usually the ISO 4217 alphabetic code.
    pub code: String,
    /// Display symbol, e.g. `$`, `£`, or `NT$`.
    pub grapheme: String,
    /// Display pattern containing one amount token (`1`) and one grapheme
    /// token (`$`) plus literal spacing, e.g. `"1 $"` or `"$1"`.
    pub template: String,
    /// Separator between integer and fraction digits.
    pub decimal: String,
    /// Separator grouping integer digits in threes; empty disables grouping.
    pub thousand: String,
    /// Number of minor-unit digits (2 for cents, 0 for no subunits).
    pub fraction: u32,
}

impl Currency {
    /// Creates a new currency definition.
    pub fn new(
        code: impl Into<String>,
        grapheme: impl Into<String>,
        template: impl Into<String>,
        decimal: impl Into<String>,
        thousand: impl Into<String>,
        fraction: u32,
    ) -> Self {
        Self {
            code: code.into(),
            grapheme: grapheme.into(),
            template: template.into(),
            decimal: decimal.into(),
            thousand: thousand.into(),
            fraction,
        }
    }

    /// Returns a formatter configured with this currency's conventions.
    #[must_use]
    pub fn formatter(&self) -> Formatter {
        Formatter::new(
            self.fraction,
            &self.decimal,
            &self.thousand,
            &self.grapheme,
            &self.template,
        )
    }
}

/// The currency-less fallback record: an empty code rendered with generic
/// dollar conventions. Used by the serialization boundary for zero values
/// that never resolved a currency.
impl Default for Currency {
    fn default() -> Self {
        Self::new("", "$", "$1", ".", ",", 2)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
