//! Property-based tests for lankaqr-core
//!
//! Uses proptest to verify decoder and parser invariants across randomized inputs

use lankaqr_core::tlv::{decode, encode, entries};
use lankaqr_core::{parse_lankaqr, try_parse_lankaqr};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Two-digit numeric tag
fn tag_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{2}").unwrap()
}

/// Field value that fits a two-digit length (0-99 chars)
fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .\\-]{0,99}").unwrap()
}

/// Map of distinct tags to values
fn fields_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(tag_strategy(), value_strategy(), 0..12)
}

/// Merchant account id long enough to be accepted
fn merchant_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z0-9]{10,40}").unwrap()
}

// ============================================================================
// Decoder Properties
// ============================================================================

proptest! {
    /// Property: inputs shorter than a header decode to nothing
    #[test]
    fn prop_short_input_is_empty(input in ".{0,3}") {
        prop_assume!(input.chars().count() < 4);
        prop_assert!(decode(&input).is_empty());
    }

    /// Property: encode then decode reproduces the fields
    #[test]
    fn prop_roundtrip(fields in fields_strategy()) {
        let raw = encode(fields.iter().map(|(t, v)| (t.as_str(), v.as_str())));
        let decoded = decode(&raw);

        prop_assert_eq!(decoded.len(), fields.len());
        for (tag, value) in &fields {
            prop_assert_eq!(decoded.get(tag), Some(value.as_str()));
        }
    }

    /// Property: every entry is no longer than the input left after its header
    #[test]
    fn prop_values_bounded_by_input(input in ".{0,200}") {
        let total = input.chars().count();
        let consumed: usize = entries(&input)
            .map(|e| e.tag.chars().count() + 2 + e.value.chars().count())
            .sum();
        prop_assert!(consumed <= total);
    }

    /// Property: decoding is deterministic
    #[test]
    fn prop_decode_deterministic(input in ".{0,200}") {
        prop_assert_eq!(decode(&input), decode(&input));
    }
}

// ============================================================================
// Parser Properties
// ============================================================================

proptest! {
    /// Property: arbitrary input never panics and failure is reported as None
    #[test]
    fn prop_parse_total(input in ".{0,300}") {
        let as_option = parse_lankaqr(&input);
        let as_result = try_parse_lankaqr(&input);
        prop_assert_eq!(as_option.is_some(), as_result.is_ok());
    }

    /// Property: bank code and terminal id are the ends of the merchant id
    #[test]
    fn prop_merchant_slicing(id in merchant_id_strategy()) {
        let container = encode([("00", id.as_str())]);
        let raw = encode([("26", container.as_str())]);
        let record = parse_lankaqr(&raw).unwrap();

        prop_assert_eq!(&record.bank_code, &id[..5]);
        prop_assert_eq!(&record.terminal_id, &id[id.len() - 4..]);
    }

    /// Property: merchant ids under ten characters are always rejected
    #[test]
    fn prop_short_merchant_id_rejected(id in "[A-Z0-9]{0,9}") {
        let container = encode([("00", id.as_str())]);
        let raw = encode([("26", container.as_str()), ("59", "Shop")]);
        prop_assert!(parse_lankaqr(&raw).is_none());
    }
}
