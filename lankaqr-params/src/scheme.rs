//! LankaQR scheme definitions

/// EMV merchant-presented QR tags consumed by the parser.
pub mod tags {
    /// Merchant account information container (nested TLV)
    pub const MERCHANT_ACCOUNT: &str = "26";
    /// Transaction currency (ISO-4217 numeric)
    pub const CURRENCY: &str = "53";
    /// Transaction amount
    pub const AMOUNT: &str = "54";
    /// Merchant name
    pub const MERCHANT_NAME: &str = "59";
    /// Merchant city
    pub const MERCHANT_CITY: &str = "60";
    /// Additional data field template (nested TLV)
    pub const ADDITIONAL_DATA: &str = "62";

    /// Sub-tag of [`MERCHANT_ACCOUNT`] carrying bank code and terminal id
    pub const MERCHANT_ACCOUNT_ID: &str = "00";

    /// Sub-tag of [`ADDITIONAL_DATA`] holding the reference label
    pub const REFERENCE_LABEL: &str = "05";
    /// Sub-tag of [`ADDITIONAL_DATA`] holding the bill number
    pub const BILL_NUMBER: &str = "01";
}

/// Width of a tag header in characters
pub const TAG_WIDTH: usize = 2;

/// Width of a length header in characters
pub const LENGTH_WIDTH: usize = 2;

/// Scheme layout parameters
#[derive(Debug, Clone)]
pub struct Scheme {
    /// Minimum length of the merchant account id sub-field
    pub merchant_id_min_len: usize,
    /// Characters taken from the front of the merchant account id
    pub bank_code_len: usize,
    /// Characters taken from the back of the merchant account id
    pub terminal_id_len: usize,
}

impl Scheme {
    /// Get LankaQR parameters
    pub const fn lankaqr() -> Self {
        Self {
            merchant_id_min_len: 10,
            bank_code_len: 5,
            terminal_id_len: 4,
        }
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::lankaqr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lankaqr_params() {
        let scheme = Scheme::lankaqr();
        assert_eq!(scheme.merchant_id_min_len, 10);
        assert_eq!(scheme.bank_code_len, 5);
        assert_eq!(scheme.terminal_id_len, 4);
    }

    #[test]
    fn test_slices_fit_minimum() {
        let scheme = Scheme::lankaqr();
        assert!(scheme.bank_code_len + scheme.terminal_id_len < scheme.merchant_id_min_len);
    }
}
