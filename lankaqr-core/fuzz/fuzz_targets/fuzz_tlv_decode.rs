//! Fuzz test for TLV decoding
//!
//! Ensures the decoder handles arbitrary text gracefully and never reads past the input

#![no_main]

use libfuzzer_sys::fuzz_target;
use lankaqr_core::tlv;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let total = s.chars().count();
        let consumed: usize = tlv::entries(s)
            .map(|e| 4 + e.value.chars().count())
            .sum();
        assert!(consumed <= total);

        // Nested templates go through the same routine
        for (_, value) in tlv::decode(s).iter() {
            let _ = tlv::decode(value);
        }
    }
});
