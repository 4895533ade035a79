//! Fuzz test for payload parsing
//!
//! Ensures the parser never panics and that accepted codes carry a full merchant id

#![no_main]

use libfuzzer_sys::fuzz_target;
use lankaqr_core::{parse_lankaqr, try_parse_lankaqr};

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    // Should never panic
    let parsed = parse_lankaqr(&s);
    assert_eq!(parsed.is_some(), try_parse_lankaqr(&s).is_ok());

    if let Some(record) = parsed {
        assert_eq!(record.bank_code.chars().count(), 5);
        assert_eq!(record.terminal_id.chars().count(), 4);
        assert!(!record.merchant_name.is_empty());
        assert!(!record.currency_code.is_empty());
    }
});
