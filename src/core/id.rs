//! Canonical identifier type shared by books and authors
//!
//! GraphQL transports identifiers as `ID` strings while the catalog stores
//! integers. All coercion happens once, in [`EntityId::from_str`], so the
//! resolver only ever compares integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Integer identifier of a catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Wrap a raw integer identifier
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The underlying integer
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EntityId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when a textual identifier has no integer reading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid identifier")]
pub struct InvalidId {
    pub value: String,
}

impl FromStr for EntityId {
    type Err = InvalidId;

    /// Accepts `"1"`, `" 1 "`, `"+1"` and `"1.0"`. Fractions, empty input and
    /// anything outside the `i64` range are rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidId {
            value: raw.to_string(),
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self(value));
        }

        // Decimal spellings of whole numbers ("2.0", "2.") still name record 2
        let (whole, fraction) = trimmed.split_once('.').ok_or_else(invalid)?;
        if !fraction.chars().all(|c| c == '0') {
            return Err(invalid());
        }
        whole.parse::<i64>().map(Self).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!("1".parse::<EntityId>().unwrap(), EntityId::new(1));
        assert_eq!("+7".parse::<EntityId>().unwrap(), EntityId::new(7));
        assert_eq!("-3".parse::<EntityId>().unwrap(), EntityId::new(-3));
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(" 2 ".parse::<EntityId>().unwrap(), EntityId::new(2));
        assert_eq!("\t2\n".parse::<EntityId>().unwrap(), EntityId::new(2));
    }

    #[test]
    fn test_parse_whole_decimal() {
        assert_eq!("1.0".parse::<EntityId>().unwrap(), EntityId::new(1));
        assert_eq!("1.".parse::<EntityId>().unwrap(), EntityId::new(1));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("abc".parse::<EntityId>().is_err());
        assert!("".parse::<EntityId>().is_err());
        assert!("   ".parse::<EntityId>().is_err());
        assert!("1.5".parse::<EntityId>().is_err());
        assert!("1e3".parse::<EntityId>().is_err());
        assert!(".0".parse::<EntityId>().is_err());
        assert!("99999999999999999999".parse::<EntityId>().is_err());
    }

    #[test]
    fn test_invalid_id_message() {
        let err = "abc".parse::<EntityId>().unwrap_err();
        assert_eq!(err.to_string(), "'abc' is not a valid identifier");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id: EntityId = serde_json::from_str("42").unwrap();
        assert_eq!(id, EntityId::new(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
