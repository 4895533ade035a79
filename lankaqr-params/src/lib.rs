//! LankaQR scheme parameters and constants
//!
//! This crate provides the EMV tag identifiers used by LankaQR codes, the
//! fixed-width layout constants of the merchant account field, the ISO-4217
//! currency table, and the parser configuration with its fallback values.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod currency;
pub mod scheme;

pub use config::ParserConfig;
pub use currency::{Currency, CurrencyTable};
pub use scheme::{tags, Scheme};

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration value rejected
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
