//! ISO-4217 currencies seen on LankaQR codes

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A currency known to the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO-4217 numeric code as it appears in tag 53
    pub numeric: String,
    /// ISO-4217 alphabetic code
    pub alpha: String,
    /// Digits after the decimal point
    pub minor_units: u8,
}

impl Currency {
    fn new(numeric: &str, alpha: &str, minor_units: u8) -> Self {
        Self {
            numeric: numeric.to_string(),
            alpha: alpha.to_string(),
            minor_units,
        }
    }
}

static BUILTIN: Lazy<CurrencyTable> = Lazy::new(|| {
    CurrencyTable::new(vec![
        Currency::new("144", "LKR", 2),
        Currency::new("840", "USD", 2),
        Currency::new("978", "EUR", 2),
        Currency::new("826", "GBP", 2),
        Currency::new("356", "INR", 2),
        Currency::new("392", "JPY", 0),
    ])
});

/// Lookup table keyed by numeric code
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    by_numeric: HashMap<String, Currency>,
}

impl CurrencyTable {
    /// Create a table from a list of currencies
    pub fn new(currencies: Vec<Currency>) -> Self {
        let by_numeric = currencies
            .into_iter()
            .map(|c| (c.numeric.clone(), c))
            .collect();
        Self { by_numeric }
    }

    /// Built-in table
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Find a currency by its numeric code
    pub fn by_numeric(&self, code: &str) -> Option<&Currency> {
        self.by_numeric.get(code)
    }

    /// Number of known currencies
    pub fn len(&self) -> usize {
        self.by_numeric.len()
    }

    /// Check if table is empty
    pub fn is_empty(&self) -> bool {
        self.by_numeric.is_empty()
    }
}
