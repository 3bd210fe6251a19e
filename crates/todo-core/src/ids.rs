//! Item identifiers.
//!
//! Identifiers are 12 bytes rendered as 24 lowercase hex characters: a 4-byte
//! big-endian creation timestamp (seconds since the Unix epoch) followed by
//! 8 random bytes. The store generates them; callers only ever parse them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of an identifier in hex characters.
pub const ITEM_ID_LEN: usize = 24;

/// Errors from parsing an identifier string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The string is not exactly [`ITEM_ID_LEN`] bytes long.
    #[error("identifier must be {ITEM_ID_LEN} hex characters, got {len}")]
    Length { len: usize },

    /// The string contains a character outside `[0-9a-fA-F]`.
    #[error("identifier contains non-hex character {found:?} at position {position}")]
    NonHex { position: usize, found: char },
}

/// A validated item identifier, always stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Parse and normalize an identifier string.
    ///
    /// # Errors
    ///
    /// Returns `IdError` if `s` is not 24 hex characters.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.len() != ITEM_ID_LEN {
            return Err(IdError::Length { len: s.len() });
        }
        if let Some((position, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(IdError::NonHex { position, found });
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creation time encoded in the first four bytes, in seconds since the epoch.
    #[must_use]
    pub fn timestamp(&self) -> u32 {
        // parse() guarantees the prefix is valid hex
        u32::from_str_radix(&self.0[..8], 16).unwrap_or_default()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parses_lowercase_hex() {
        let id = ItemId::parse("64c11bd1da6b431c66c28a88").unwrap();
        assert_eq!(id.as_str(), "64c11bd1da6b431c66c28a88");
    }

    #[test]
    fn normalizes_uppercase() {
        let id = ItemId::parse("64C11BD1DA6B431C66C28A88").unwrap();
        assert_eq!(id.to_string(), "64c11bd1da6b431c66c28a88");
    }

    #[rstest]
    #[case("", 0)]
    #[case("64c11bd1", 8)]
    #[case("64c11bd1da6b431c66c28a8800", 26)]
    fn rejects_wrong_length(#[case] input: &str, #[case] len: usize) {
        assert_eq!(ItemId::parse(input), Err(IdError::Length { len }));
    }

    #[test]
    fn rejects_non_hex() {
        let err = ItemId::parse("64c11bd1da6b431c66c28a8z").unwrap_err();
        assert_eq!(
            err,
            IdError::NonHex {
                position: 23,
                found: 'z'
            }
        );
    }

    #[test]
    fn rejects_multibyte_input_of_matching_byte_length() {
        // 22 ASCII bytes + one 2-byte char = 24 bytes
        let input = "64c11bd1da6b431c66c28aé";
        assert_eq!(input.len(), ITEM_ID_LEN);
        assert!(matches!(ItemId::parse(input), Err(IdError::NonHex { .. })));
    }

    #[test]
    fn timestamp_reads_leading_bytes() {
        let id = ItemId::parse("64c11bd1da6b431c66c28a88").unwrap();
        assert_eq!(id.timestamp(), 0x64c1_1bd1);
    }

    #[test]
    fn deserialize_validates() {
        let ok: ItemId = serde_json::from_str("\"64c11bd1da6b431c66c28a88\"").unwrap();
        assert_eq!(ok.as_str(), "64c11bd1da6b431c66c28a88");
        assert!(serde_json::from_str::<ItemId>("\"not-an-id\"").is_err());
    }
}
