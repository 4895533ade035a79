//! Parsed payment record

use lankaqr_params::{Currency, CurrencyTable};
use serde::{Deserialize, Serialize};

/// Payment details decoded from one scanned or uploaded code.
///
/// Built once per scan and never mutated; a new scan replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPaymentRecord {
    /// Receiving bank code
    pub bank_code: String,
    /// Merchant terminal id
    pub terminal_id: String,
    /// Merchant display name
    pub merchant_name: String,
    /// Merchant city
    pub merchant_city: String,
    /// ISO-4217 numeric currency code, unvalidated
    pub currency_code: String,
    /// Amount as printed in the code; static codes carry none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Payment reference, empty when the code carries none
    pub reference: String,
}

impl ParsedPaymentRecord {
    /// Resolve the currency code against the built-in table
    pub fn currency(&self) -> Option<&'static Currency> {
        CurrencyTable::builtin().by_numeric(&self.currency_code)
    }

    /// Check if the payer must supply the amount
    pub fn is_static(&self) -> bool {
        self.amount.is_none()
    }

    /// Check if a reference was present
    pub fn has_reference(&self) -> bool {
        !self.reference.is_empty()
    }
}
