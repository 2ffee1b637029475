//! Opaque identifiers for movers, items and mission log entries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::SharedError;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_string(s: &str) -> Result<Self, SharedError> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|_| SharedError::InvalidId {
                        kind: $kind,
                        input: s.to_string(),
                    })
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = SharedError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_string(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a mover
    MoverId,
    "mover"
);

uuid_id!(
    /// Unique identifier for a cargo item
    ItemId,
    "item"
);

uuid_id!(
    /// Unique identifier for a mission log entry
    LogEntryId,
    "log entry"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let id = MoverId::new();
        let parsed = MoverId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);

        let err = ItemId::from_string("not-a-uuid").unwrap_err();
        assert_eq!(err.to_string(), "Invalid item id: not-a-uuid");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ItemId::from_string("550e8400-e29b-41d4-a716-446655440001").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440001\"");
    }
}
