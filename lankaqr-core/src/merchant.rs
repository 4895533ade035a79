//! Merchant account information (tag 26)
//!
//! The container holds a nested TLV template whose sub-tag 00 concatenates a
//! bank code and a terminal id. Issuers pad the middle of that field
//! differently, so only the leading bank code and the trailing terminal id
//! are read; whatever sits between them is ignored.

use crate::tlv;
use crate::{Error, Result};
use lankaqr_params::{tags, Scheme};
use serde::{Deserialize, Serialize};

/// Receiving institution and terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantAccountInfo {
    /// Leading characters of the merchant account id
    pub bank_code: String,
    /// Trailing characters of the merchant account id
    pub terminal_id: String,
}

impl MerchantAccountInfo {
    /// Extract from the raw value of tag 26, reporting why extraction failed
    pub fn from_container(container: &str, scheme: &Scheme) -> Result<Self> {
        if container.is_empty() {
            return Err(Error::MissingMerchantInfo(format!(
                "tag {} is missing or empty",
                tags::MERCHANT_ACCOUNT
            )));
        }

        let sub_fields = tlv::decode(container);
        let account_id = sub_fields
            .get_non_empty(tags::MERCHANT_ACCOUNT_ID)
            .ok_or_else(|| {
                Error::MissingMerchantInfo(format!(
                    "sub-tag {} not found in tag {}",
                    tags::MERCHANT_ACCOUNT_ID,
                    tags::MERCHANT_ACCOUNT
                ))
            })?;

        let chars: Vec<char> = account_id.chars().collect();
        let min_len = scheme
            .merchant_id_min_len
            .max(scheme.bank_code_len)
            .max(scheme.terminal_id_len);
        if chars.len() < min_len {
            return Err(Error::InvalidMerchantInfo(format!(
                "merchant account id is {} characters, minimum is {}",
                chars.len(),
                min_len
            )));
        }

        let bank_code = chars[..scheme.bank_code_len].iter().collect();
        let terminal_id = chars[chars.len() - scheme.terminal_id_len..].iter().collect();

        Ok(Self {
            bank_code,
            terminal_id,
        })
    }
}

/// Extract merchant account info from the raw value of tag 26.
///
/// Returns `None` when the container is empty, lacks sub-tag 00, or that
/// sub-field is shorter than ten characters.
pub fn extract_merchant_info(container: &str) -> Option<MerchantAccountInfo> {
    match MerchantAccountInfo::from_container(container, &Scheme::lankaqr()) {
        Ok(info) => Some(info),
        Err(e) => {
            tracing::debug!("Merchant info rejected: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlv::encode_entry;

    #[test]
    fn test_exact_minimum_length() {
        let container = encode_entry("00", "ABCDE9WXYZ");
        let info = extract_merchant_info(&container).unwrap();
        assert_eq!(info.bank_code, "ABCDE");
        assert_eq!(info.terminal_id, "WXYZ");
    }

    #[test]
    fn test_middle_characters_ignored() {
        let container = encode_entry("00", "7135100000000000T001");
        let info = extract_merchant_info(&container).unwrap();
        assert_eq!(info.bank_code, "71351");
        assert_eq!(info.terminal_id, "T001");
    }

    #[test]
    fn test_other_sub_tags_ignored() {
        let container = format!(
            "{}{}",
            encode_entry("01", "lk.lankapay"),
            encode_entry("00", "BANK1XTERM")
        );
        let info = extract_merchant_info(&container).unwrap();
        assert_eq!(info.bank_code, "BANK1");
        assert_eq!(info.terminal_id, "TERM");
    }

    #[test]
    fn test_empty_container() {
        assert!(extract_merchant_info("").is_none());
        assert!(matches!(
            MerchantAccountInfo::from_container("", &Scheme::lankaqr()),
            Err(Error::MissingMerchantInfo(_))
        ));
    }

    #[test]
    fn test_missing_sub_tag() {
        let container = encode_entry("01", "ABCDE12345");
        assert!(extract_merchant_info(&container).is_none());
    }

    #[test]
    fn test_too_short() {
        let container = encode_entry("00", "ABCDE1234");
        assert!(extract_merchant_info(&container).is_none());
        assert!(matches!(
            MerchantAccountInfo::from_container(&container, &Scheme::lankaqr()),
            Err(Error::InvalidMerchantInfo(_))
        ));
    }

    #[test]
    fn test_slice_widths_bound_minimum_length() {
        let scheme = Scheme {
            merchant_id_min_len: 3,
            ..Scheme::lankaqr()
        };

        let container = encode_entry("00", "ABCD");
        assert!(matches!(
            MerchantAccountInfo::from_container(&container, &scheme),
            Err(Error::InvalidMerchantInfo(_))
        ));

        let container = encode_entry("00", "ABCDE");
        let info = MerchantAccountInfo::from_container(&container, &scheme).unwrap();
        assert_eq!(info.bank_code, "ABCDE");
        assert_eq!(info.terminal_id, "BCDE");
    }

    #[test]
    fn test_truncated_sub_field_counts_available_chars() {
        // Declares 12 but only 10 remain
        let info = extract_merchant_info("0012ABCDE1WXYZ").unwrap();
        assert_eq!(info.bank_code, "ABCDE");
        assert_eq!(info.terminal_id, "WXYZ");
    }
}
