//! Process-wide currency registry.
//!
//! The registry maps currency codes to [`Currency`] records. It is seeded
//! with the built-in table on first use and may be extended or overridden at
//! runtime. Reads vastly outnumber writes, so a read-write lock guards the
//! map: concurrent lookups proceed in parallel and always observe a fully
//! formed record, never a partially written one.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use tracing::debug;

use super::Currency;
use super::iso::builtin_currencies;

static REGISTRY: Lazy<RwLock<HashMap<String, Currency>>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for currency in builtin_currencies() {
        table.insert(currency.code.clone(), currency);
    }
    RwLock::new(table)
});

/// Looks up a currency by code.
///
/// Returns an owned snapshot of the record, so the caller keeps formatting
/// consistently even if the registry entry is overridden afterwards.
///
/// # Panics
///
/// Panics if the registry lock was poisoned by a panicking writer.
#[must_use]
pub fn find_currency(code: &str) -> Option<Currency> {
    REGISTRY
        .read()
        .expect("currency registry poisoned")
        .get(code)
        .cloned()
}

/// Inserts or overrides a currency definition, keyed by its code.
///
/// Money values constructed before the call keep the record they captured;
/// only later lookups see the new definition.
///
/// # Panics
///
/// Panics if the registry lock was poisoned by a panicking writer.
pub fn register_currency(currency: Currency) {
    debug!(code = %currency.code, fraction = currency.fraction, "Registering currency");
    REGISTRY
        .write()
        .expect("currency registry poisoned")
        .insert(currency.code.clone(), currency);
}
