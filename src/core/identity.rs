//! Entity identity - ULID-based incident identifiers
//!
//! Every incident gets a sortable, globally unique ID of the form
//! `INC-01ARZ3NDEKTSV4RRFFQ69G5FAV`. ULIDs sort lexicographically by creation
//! time, so directory listings and plain `sort` produce chronological order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use ulid::Ulid;

/// Prefix for incident IDs
pub const ID_PREFIX: &str = "INC";

/// Errors from parsing an entity ID string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("Missing '{ID_PREFIX}-' prefix in ID: {0}")]
    MissingPrefix(String),

    #[error("Invalid ULID in ID '{id}': {reason}")]
    InvalidUlid { id: String, reason: String },
}

/// A unique incident identifier: `INC-<ULID>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(Ulid);

impl EntityId {
    /// Generate a fresh ID (timestamped ULID)
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse an ID string of the form `INC-<ULID>`
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        let rest = s
            .strip_prefix(ID_PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or_else(|| IdParseError::MissingPrefix(s.to_string()))?;

        let ulid = Ulid::from_string(rest).map_err(|e| IdParseError::InvalidUlid {
            id: s.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self(ulid))
    }

    /// The underlying ULID
    pub fn ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", ID_PREFIX, self.0)
    }
}

impl FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = EntityId::new();
        let parsed = EntityId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_display_has_prefix() {
        let id = EntityId::new();
        assert!(id.to_string().starts_with("INC-"));
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        let err = EntityId::parse("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap_err();
        assert!(matches!(err, IdParseError::MissingPrefix(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_prefix() {
        let err = EntityId::parse("REQ-01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap_err();
        assert!(matches!(err, IdParseError::MissingPrefix(_)));
    }

    #[test]
    fn test_parse_rejects_bad_ulid() {
        let err = EntityId::parse("INC-not-a-ulid").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidUlid { .. }));
    }

    #[test]
    fn test_serde_as_string() {
        let id = EntityId::parse("INC-01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap();
        let yaml = serde_yml::to_string(&id).unwrap();
        assert_eq!(yaml.trim(), "INC-01ARZ3NDEKTSV4RRFFQ69G5FAV");
        let back: EntityId = serde_yml::from_str(yaml.trim()).unwrap();
        assert_eq!(id, back);
    }
}
