//! LankaQR payment code core
//!
//! This crate decodes the EMV-style text payload of LankaQR merchant codes:
//! a generic TLV decoder, merchant and reference extraction built on it, and
//! a payment draft helper for the confirmation step.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod merchant;
pub mod parser;
pub mod payment;
pub mod record;
pub mod tlv;

pub use error::{Error, ErrorCategory, Result};
pub use merchant::{extract_merchant_info, MerchantAccountInfo};
pub use parser::{parse_lankaqr, try_parse_lankaqr, LankaQrParser};
pub use payment::{format_amount, format_amount_for_code, parse_amount, PaymentDraft};
pub use record::ParsedPaymentRecord;
pub use tlv::{decode, entries, TlvEntry, TlvMap};

pub use lankaqr_params::{Currency, CurrencyTable, ParserConfig};
