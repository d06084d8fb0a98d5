//! Identifiers for fields and satellite images.
//!
//! The analytics service may send ids as JSON strings or numbers. Selections
//! come back from the DOM as strings, so ids are normalised to their string
//! form on the way in and compared as strings everywhere.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Any JSON scalar the service uses as an identifier.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Integer(i) => i.to_string(),
            RawId::Float(f) => f.to_string(),
        }
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of an agricultural field.
    FieldId
);

string_id!(
    /// Identifier of a satellite image capture.
    ImageId
);

#[cfg(test)]
mod tests {
    use super::{FieldId, ImageId};

    #[test]
    fn test_string_and_numeric_ids_deserialize() {
        let ids: Vec<FieldId> = serde_json::from_str(r#"["F-1", 7, 3.5]"#).unwrap();
        assert_eq!(ids[0].as_str(), "F-1");
        assert_eq!(ids[1].as_str(), "7");
        assert_eq!(ids[2].as_str(), "3.5");
    }

    #[test]
    fn test_numeric_id_matches_dom_string() {
        let id: ImageId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ImageId::from("42"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&FieldId::new("north-40")).unwrap();
        assert_eq!(json, r#""north-40""#);
    }
}
