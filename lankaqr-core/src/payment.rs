//! Payment drafting
//!
//! A draft carries what the payer confirms before a transfer: the decoded
//! merchant, an amount (pre-filled from dynamic codes, editable always) and a
//! reference. Amounts are held in integer minor units. Nothing here moves money.

use crate::record::ParsedPaymentRecord;
use crate::{Error, Result};
use lankaqr_params::{Currency, CurrencyTable};

/// Minor units assumed for currencies missing from the table
const FALLBACK_MINOR_UNITS: u8 = 2;

/// Editable payment built from a scanned code
#[derive(Debug, Clone)]
pub struct PaymentDraft {
    record: ParsedPaymentRecord,
    amount_minor: Option<u64>,
    reference: String,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PaymentDraft {
    /// Create a draft, pre-filling amount and reference from the record.
    ///
    /// An amount the code carries but that does not parse is left unset for
    /// the payer to enter.
    pub fn from_record(record: ParsedPaymentRecord) -> Self {
        let amount_minor = record.amount.as_deref().and_then(|text| {
            match parse_amount(text, minor_units_for(&record)) {
                Ok(minor) => Some(minor),
                Err(e) => {
                    tracing::debug!("Ignoring pre-filled amount: {}", e);
                    None
                }
            }
        });

        let draft = Self {
            reference: record.reference.clone(),
            amount_minor,
            record,
            created_at: chrono::Utc::now(),
        };

        tracing::info!(
            "Created payment draft for terminal {} (amount pre-filled: {})",
            draft.record.terminal_id,
            draft.amount_minor.is_some()
        );

        draft
    }

    /// Decoded code this draft pays
    pub fn record(&self) -> &ParsedPaymentRecord {
        &self.record
    }

    /// Amount in minor units, if set
    pub fn amount_minor(&self) -> Option<u64> {
        self.amount_minor
    }

    /// Payment reference
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Replace the amount with user-entered text
    pub fn set_amount(&mut self, text: &str) -> Result<u64> {
        let minor = parse_amount(text, minor_units_for(&self.record))?;
        self.amount_minor = Some(minor);
        Ok(minor)
    }

    /// Replace the reference
    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.reference = reference.into();
    }

    /// Check the draft against an account balance (minor units)
    pub fn check_balance(&self, balance_minor: u64) -> Result<()> {
        let amount = self
            .amount_minor
            .ok_or_else(|| Error::InvalidAmount("No amount entered".to_string()))?;

        if amount > balance_minor {
            return Err(Error::InsufficientFunds(format!(
                "Amount {} exceeds balance {}",
                amount, balance_minor
            )));
        }
        Ok(())
    }

    /// Amount rendered with the record's currency, e.g. `LKR 4,250.00`
    pub fn display_amount(&self) -> Option<String> {
        let amount = self.amount_minor?;
        Some(match self.record.currency() {
            Some(currency) => format_amount(amount, currency),
            None => format_grouped(amount, FALLBACK_MINOR_UNITS),
        })
    }
}

/// Minor units per major unit; `None` when that does not fit in a `u64`
fn minor_scale(minor_units: u8) -> Option<u64> {
    10u64.checked_pow(u32::from(minor_units))
}

fn minor_units_for(record: &ParsedPaymentRecord) -> u8 {
    record
        .currency()
        .map(|c| c.minor_units)
        .unwrap_or(FALLBACK_MINOR_UNITS)
}

/// Parse decimal text into minor units.
///
/// Accepts `,` thousands separators and at most `minor_units` fractional
/// digits. Zero, negative and non-numeric text is rejected.
pub fn parse_amount(text: &str, minor_units: u8) -> Result<u64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(Error::InvalidAmount("Amount is empty".to_string()));
    }

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return Err(Error::InvalidAmount(format!("'{}' is not a number", text.trim())));
    }

    if fraction.len() > usize::from(minor_units) {
        return Err(Error::InvalidAmount(format!(
            "At most {} decimal places allowed",
            minor_units
        )));
    }

    let scale = minor_scale(minor_units).ok_or_else(|| {
        Error::InvalidAmount(format!("{} decimal places not supported", minor_units))
    })?;
    let overflow = || Error::InvalidAmount(format!("'{}' is too large", text.trim()));
    let whole_value: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let padded = format!("{:0<width$}", fraction, width = usize::from(minor_units));
    let fraction_value: u64 = if padded.is_empty() {
        0
    } else {
        padded.parse().map_err(|_| overflow())?
    };

    let minor = whole_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(fraction_value))
        .ok_or_else(overflow)?;

    if minor == 0 {
        return Err(Error::InvalidAmount("Amount must be greater than zero".to_string()));
    }

    Ok(minor)
}

/// Render minor units with the currency's alphabetic code
pub fn format_amount(minor: u64, currency: &Currency) -> String {
    format!("{} {}", currency.alpha, format_grouped(minor, currency.minor_units))
}

/// Render minor units with the code looked up from the built-in table
pub fn format_amount_for_code(minor: u64, numeric_code: &str) -> String {
    match CurrencyTable::builtin().by_numeric(numeric_code) {
        Some(currency) => format_amount(minor, currency),
        None => format_grouped(minor, FALLBACK_MINOR_UNITS),
    }
}

fn format_grouped(minor: u64, minor_units: u8) -> String {
    let (whole, fraction) = match minor_scale(minor_units) {
        Some(scale) => (minor / scale, minor % scale),
        None => (0, minor),
    };
    let whole = whole.to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if minor_units == 0 {
        grouped
    } else {
        format!(
            "{}.{:0width$}",
            grouped,
            fraction,
            width = usize::from(minor_units)
        )
    }
}
