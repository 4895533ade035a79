//! Parser configuration
//!
//! Fallback values applied when optional tags are missing from a code.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Merchant name used when tag 59 is missing
pub const DEFAULT_MERCHANT_NAME: &str = "Unknown Merchant";

/// Merchant city used when tag 60 is missing
pub const DEFAULT_MERCHANT_CITY: &str = "Unknown City";

/// Currency used when tag 53 is missing (LKR)
pub const DEFAULT_CURRENCY_CODE: &str = "144";

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Fallback merchant name
    pub default_merchant_name: String,
    /// Fallback merchant city
    pub default_merchant_city: String,
    /// Fallback ISO-4217 numeric currency code
    pub default_currency_code: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_merchant_name: DEFAULT_MERCHANT_NAME.to_string(),
            default_merchant_city: DEFAULT_MERCHANT_CITY.to_string(),
            default_currency_code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

impl ParserConfig {
    /// Parse configuration from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_merchant_name.is_empty() {
            return Err(Error::InvalidConfig(
                "default_merchant_name must not be empty".to_string(),
            ));
        }
        if self.default_merchant_city.is_empty() {
            return Err(Error::InvalidConfig(
                "default_merchant_city must not be empty".to_string(),
            ));
        }
        if self.default_currency_code.is_empty() {
            return Err(Error::InvalidConfig(
                "default_currency_code must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.default_merchant_name, "Unknown Merchant");
        assert_eq!(config.default_merchant_city, "Unknown City");
        assert_eq!(config.default_currency_code, "144");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ParserConfig::from_json(r#"{"default_merchant_city":"Colombo"}"#).unwrap();
        assert_eq!(config.default_merchant_city, "Colombo");
        assert_eq!(config.default_merchant_name, "Unknown Merchant");
        assert_eq!(config.default_currency_code, "144");
    }

    #[test]
    fn test_empty_default_rejected() {
        let result = ParserConfig::from_json(r#"{"default_currency_code":""}"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ParserConfig::from_json("{not json"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_merchant_name":"Corner Shop"}}"#).unwrap();

        let config = ParserConfig::load(file.path()).unwrap();
        assert_eq!(config.default_merchant_name, "Corner Shop");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ParserConfig::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
