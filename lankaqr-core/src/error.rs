//! Error types for LankaQR Core
//!
//! Error taxonomy for code extraction and payment drafting. The TLV decoder
//! itself never fails; these errors come from the layers built on it.

use std::fmt;

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// LankaQR Core errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Merchant account container or its id sub-field is absent
    #[error("Missing merchant info: {0}")]
    MissingMerchantInfo(String),

    /// Merchant account id present but unusable
    #[error("Invalid merchant info: {0}")]
    InvalidMerchantInfo(String),

    /// Invalid amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Amount exceeds the available balance
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Configuration rejected
    #[error("Config error: {0}")]
    InvalidConfig(#[from] lankaqr_params::Error),
}

impl Error {
    /// Check if error is a user-facing error (vs internal error)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::MissingMerchantInfo(_)
                | Error::InvalidMerchantInfo(_)
                | Error::InvalidAmount(_)
                | Error::InsufficientFunds(_)
        )
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingMerchantInfo(_) | Error::InvalidMerchantInfo(_) => {
                "This is not a valid LankaQR code. Please scan the merchant's code again.".to_string()
            }
            Error::InvalidAmount(_) => {
                "The amount is invalid. Please enter a valid amount.".to_string()
            }
            Error::InsufficientFunds(_) => {
                "The selected account does not have enough funds for this payment.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MissingMerchantInfo(_) | Error::InvalidMerchantInfo(_) => {
                ErrorCategory::Merchant
            }
            Error::InvalidAmount(_) | Error::InsufficientFunds(_) => ErrorCategory::Amount,
            Error::InvalidConfig(_) => ErrorCategory::Config,
        }
    }
}

/// Error categories for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Merchant account errors
    Merchant,
    /// Amount-related errors
    Amount,
    /// Configuration errors
    Config,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Merchant => write!(f, "Merchant"),
            ErrorCategory::Amount => write!(f, "Amount"),
            ErrorCategory::Config => write!(f, "Config"),
        }
    }
}
