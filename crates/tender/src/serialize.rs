//! Wire representations for [`Money`].
//!
//! The default shape carries the amount as a decimal string plus the
//! currency code:
//!
//! ```json
//! {"amount": "12.345", "currency": "IQD"}
//! ```
//!
//! The amount string uses the currency's decimal separator but never its
//! grouping separator, so encoded values always parse back. A payload with
//! neither field (or both empty) decodes to the currency-less zero value
//! instead of an error; non-string fields are rejected.
//!
//! Callers that need a different shape pick one per field instead of
//! swapping a global: [`minor_units`] serializes the raw integer amount and
//! plugs in through `#[serde(with = "tender::serialize::minor_units")]`.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::format::Formatter;
use crate::money::Money;

/// Renders the amount for the wire: the currency's decimal separator, no
/// grouping.
fn wire_amount(money: &Money) -> String {
    let currency = money.currency();
    let ungrouped = Formatter::new(
        currency.fraction,
        &currency.decimal,
        "",
        &currency.grapheme,
        &currency.template,
    );
    ungrouped.format_amount(money.amount())
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Money", 2)?;
        state.serialize_field("amount", &wire_amount(self))?;
        state.serialize_field("currency", self.currency_code())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct MoneyWire {
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    currency: Option<String>,
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = MoneyWire::deserialize(deserializer)?;
        let amount = wire.amount.unwrap_or_default();
        let currency = wire.currency.unwrap_or_default();
        if amount.is_empty() && currency.is_empty() {
            return Ok(Self::default());
        }
        Self::from_string(&amount, &currency).map_err(serde::de::Error::custom)
    }
}

/// Alternative wire shape carrying raw minor units.
///
/// ```json
/// {"amount": 10012, "currency": "USD"}
/// ```
///
/// Use with serde's field attribute:
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use tender::Money;
///
/// #[derive(Serialize, Deserialize)]
/// struct Payment {
///     #[serde(with = "tender::serialize::minor_units")]
///     price: Money,
/// }
/// ```
pub mod minor_units {
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::arithmetic::Amount;
    use crate::money::Money;

    /// Serializes the raw amount and currency code.
    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Money", 2)?;
        state.serialize_field("amount", &money.amount())?;
        state.serialize_field("currency", money.currency_code())?;
        state.end()
    }

    /// Resolves the currency through the registry and rebuilds the value.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            amount: Amount,
            currency: String,
        }

        let wire = Wire::deserialize(deserializer)?;
        Money::new(wire.amount, &wire.currency).map_err(serde::de::Error::custom)
    }
}
