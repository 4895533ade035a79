//! Text TLV decoding
//!
//! EMV merchant-presented codes are a flat run of `TTLLV...` fields: a
//! two-character tag, a two-digit decimal length, then that many characters
//! of value. The same routine decodes the top-level payload and the nested
//! templates carried inside container tags.
//!
//! Decoding is total. A malformed length ends the stream and a value that runs
//! past the end of input is cut short; neither is reported as an error.

use lankaqr_params::scheme::{LENGTH_WIDTH, TAG_WIDTH};
use std::collections::BTreeMap;

const HEADER_WIDTH: usize = TAG_WIDTH + LENGTH_WIDTH;

/// A single decoded field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvEntry {
    /// Two-character tag
    pub tag: String,
    /// Field value
    pub value: String,
}

/// Iterator over the fields of a TLV string, in input order
#[derive(Debug, Clone)]
pub struct Entries {
    chars: Vec<char>,
    cursor: usize,
    done: bool,
}

impl Entries {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            cursor: 0,
            done: false,
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}

impl Iterator for Entries {
    type Item = TlvEntry;

    fn next(&mut self) -> Option<TlvEntry> {
        let len = self.chars.len();
        if self.done || self.cursor + HEADER_WIDTH > len {
            self.done = true;
            return None;
        }

        let tag_end = self.cursor + TAG_WIDTH;
        let header_end = tag_end + LENGTH_WIDTH;
        let tag = self.slice(self.cursor, tag_end);
        let length_field = self.slice(tag_end, header_end);

        let declared = match parse_length(&length_field) {
            Some(n) if n >= 0 => n as usize,
            _ => {
                tracing::debug!(
                    "TLV decode stopped at offset {}: bad length {:?} for tag {:?}",
                    self.cursor,
                    length_field,
                    tag
                );
                self.done = true;
                return None;
            }
        };

        let value_end = header_end.saturating_add(declared).min(len);
        let value = self.slice(header_end, value_end);
        self.cursor = value_end;

        Some(TlvEntry { tag, value })
    }
}

/// Parse a length field the way lenient integer parsing does: leading
/// whitespace, an optional sign, then the longest run of decimal digits.
/// Returns `None` when no digit follows.
fn parse_length(field: &str) -> Option<i64> {
    let trimmed = field.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Iterate over the fields of `input` in order
pub fn entries(input: &str) -> Entries {
    Entries::new(input)
}

/// Decode `input` into a tag map. Later duplicates replace earlier ones.
pub fn decode(input: &str) -> TlvMap {
    entries(input).collect()
}

/// Tag to value map produced by one decode pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvMap {
    fields: BTreeMap<String, String>,
}

impl TlvMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the value it replaced
    pub fn insert(&mut self, tag: String, value: String) -> Option<String> {
        self.fields.insert(tag, value)
    }

    /// Value for `tag`, if present
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.fields.get(tag).map(String::as_str)
    }

    /// Value for `tag`, treating an empty value as absent
    pub fn get_non_empty(&self, tag: &str) -> Option<&str> {
        self.get(tag).filter(|v| !v.is_empty())
    }

    /// Check if `tag` is present
    pub fn contains(&self, tag: &str) -> bool {
        self.fields.contains_key(tag)
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if map is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in tag order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }
}

impl FromIterator<TlvEntry> for TlvMap {
    fn from_iter<I: IntoIterator<Item = TlvEntry>>(iter: I) -> Self {
        let mut map = TlvMap::new();
        for entry in iter {
            map.insert(entry.tag, entry.value);
        }
        map
    }
}

/// Encode one field with a two-digit length prefix.
///
/// Values longer than 99 characters cannot be represented and will not
/// decode back to the same field.
#[cfg(any(test, feature = "test-helpers"))]
pub fn encode_entry(tag: &str, value: &str) -> String {
    format!("{}{:02}{}", tag, value.chars().count(), value)
}

/// Encode fields in the given order
#[cfg(any(test, feature = "test-helpers"))]
pub fn encode<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    fields
        .into_iter()
        .map(|(tag, value)| encode_entry(tag, value))
        .collect()
}
