//! Locale-aware rendering of minor-unit amounts.
//!
//! A [`Formatter`] turns a scaled integer into display text using a
//! currency's conventions: zero-padded minor-unit digits, optional grouping
//! of the integer part in threes, and a template placing the amount relative
//! to the currency symbol.

use crate::arithmetic::Amount;

/// Token in a currency template replaced by the rendered digits.
const AMOUNT_TOKEN: &str = "1";
/// Token in a currency template replaced by the currency grapheme.
const GRAPHEME_TOKEN: &str = "$";

/// Renders minor-unit amounts according to one currency's conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    fraction: u32,
    decimal: String,
    thousand: String,
    grapheme: String,
    template: String,
}

impl Formatter {
    /// Creates a formatter from display conventions.
    ///
    /// `template` must contain exactly one amount token (`1`) and exactly one
    /// grapheme token (`$`); an empty `thousand` disables digit grouping.
    #[must_use]
    pub fn new(
        fraction: u32,
        decimal: &str,
        thousand: &str,
        grapheme: &str,
        template: &str,
    ) -> Self {
        Self {
            fraction,
            decimal: decimal.to_string(),
            thousand: thousand.to_string(),
            grapheme: grapheme.to_string(),
            template: template.to_string(),
        }
    }

    /// Renders `amount` through the template, grapheme included.
    #[must_use]
    pub fn format(&self, amount: Amount) -> String {
        let rendered = self
            .template
            .replacen(AMOUNT_TOKEN, &self.numeric(amount), 1)
            .replacen(GRAPHEME_TOKEN, &self.grapheme, 1);
        if amount < 0 {
            format!("-{rendered}")
        } else {
            rendered
        }
    }

    /// Renders `amount` as bare digits, dropping the grapheme and any
    /// spacing the template kept around it.
    #[must_use]
    pub fn format_amount(&self, amount: Amount) -> String {
        let rendered = self
            .template
            .replacen(AMOUNT_TOKEN, &self.numeric(amount), 1)
            .replacen(GRAPHEME_TOKEN, "", 1);
        let rendered = rendered.trim();
        if amount < 0 {
            format!("-{rendered}")
        } else {
            rendered.to_string()
        }
    }

    /// Converts `amount` to major units as a float, dividing by
    /// `10^fraction`.
    ///
    /// This is a lossy view: `f64` cannot represent every 64-bit amount
    /// exactly, so very large magnitudes lose precision. Use the string
    /// renderers when exact digits matter.
    #[must_use]
    pub fn to_major_units(&self, amount: Amount) -> f64 {
        amount as f64 / 10f64.powi(self.fraction as i32)
    }

    /// Renders the unsigned digits of `amount` with grouping and the decimal
    /// separator applied.
    fn numeric(&self, amount: Amount) -> String {
        let fraction = self.fraction as usize;
        let mut digits = amount.unsigned_abs().to_string();
        if digits.len() < fraction + 1 {
            digits = format!("{digits:0>width$}", width = fraction + 1);
        }

        let (integer_part, fraction_part) = digits.split_at(digits.len() - fraction);
        let mut rendered = String::with_capacity(digits.len() + 4);
        if self.thousand.is_empty() {
            rendered.push_str(integer_part);
        } else {
            let count = integer_part.len();
            for (index, digit) in integer_part.chars().enumerate() {
                if index > 0 && (count - index) % 3 == 0 {
                    rendered.push_str(&self.thousand);
                }
                rendered.push(digit);
            }
        }
        if fraction > 0 {
            rendered.push_str(&self.decimal);
            rendered.push_str(fraction_part);
        }
        rendered
    }
}
