//! LankaQR payload parsing
//!
//! Turns the text produced by a QR reader into a [`ParsedPaymentRecord`].
//! Merchant account info (tag 26) is the only required field group; every
//! other field falls back to a configured default or stays unset.

use crate::merchant::MerchantAccountInfo;
use crate::record::ParsedPaymentRecord;
use crate::tlv::{self, TlvMap};
use crate::Result;
use lankaqr_params::{tags, ParserConfig, Scheme};

/// Payload parser
#[derive(Debug, Clone, Default)]
pub struct LankaQrParser {
    config: ParserConfig,
    scheme: Scheme,
}

impl LankaQrParser {
    /// Create parser with default fallbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Create parser with custom fallbacks
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scheme: Scheme::lankaqr(),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a payload, reporting why it was rejected
    pub fn try_parse(&self, raw: &str) -> Result<ParsedPaymentRecord> {
        let fields = tlv::decode(raw);

        let merchant = MerchantAccountInfo::from_container(
            fields.get(tags::MERCHANT_ACCOUNT).unwrap_or_default(),
            &self.scheme,
        )?;

        let config = &self.config;
        let merchant_name = field_or(&fields, tags::MERCHANT_NAME, &config.default_merchant_name);
        let merchant_city = field_or(&fields, tags::MERCHANT_CITY, &config.default_merchant_city);
        let currency_code = field_or(&fields, tags::CURRENCY, &config.default_currency_code);
        let amount = fields.get(tags::AMOUNT).map(str::to_string);
        let reference = extract_reference(&fields);

        tracing::debug!(
            "Parsed code for bank {} terminal {} ({} fields)",
            merchant.bank_code,
            merchant.terminal_id,
            fields.len()
        );

        Ok(ParsedPaymentRecord {
            bank_code: merchant.bank_code,
            terminal_id: merchant.terminal_id,
            merchant_name,
            merchant_city,
            currency_code,
            amount,
            reference,
        })
    }

    /// Parse a payload; any failure is logged and yields `None`
    pub fn parse(&self, raw: &str) -> Option<ParsedPaymentRecord> {
        match self.try_parse(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Rejected LankaQR payload [{}]: {}", e.category(), e);
                None
            }
        }
    }
}

fn field_or(fields: &TlvMap, tag: &str, default: &str) -> String {
    fields.get_non_empty(tag).unwrap_or(default).to_string()
}

/// Reference from the additional data template (tag 62): the reference
/// label (05) wins over the bill number (01). Empty when neither is set.
fn extract_reference(fields: &TlvMap) -> String {
    let Some(template) = fields.get_non_empty(tags::ADDITIONAL_DATA) else {
        return String::new();
    };

    let sub_fields = tlv::decode(template);
    sub_fields
        .get_non_empty(tags::REFERENCE_LABEL)
        .or_else(|| sub_fields.get_non_empty(tags::BILL_NUMBER))
        .unwrap_or_default()
        .to_string()
}

/// Parse a payload with default fallbacks
pub fn parse_lankaqr(raw: &str) -> Option<ParsedPaymentRecord> {
    LankaQrParser::new().parse(raw)
}

/// Parse a payload with default fallbacks, keeping the rejection reason
pub fn try_parse_lankaqr(raw: &str) -> Result<ParsedPaymentRecord> {
    LankaQrParser::new().try_parse(raw)
}
