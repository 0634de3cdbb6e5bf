//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers coming from the club API are opaque: the server sends some of
//! them as JSON strings and others as integers. The wrappers below accept
//! both, normalize them to trimmed strings and reject blank values so that
//! once an identifier reaches the domain layer it can be used in a request
//! path as-is.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Raw identifier as it appears on the wire.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(value: RawId) -> Self {
        match value {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Macro to generate identifier newtypes backed by trimmed, non-empty strings.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "RawId", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier ensuring it is not blank.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<RawId> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: RawId) -> Result<Self, Self::Error> {
                Self::new(String::from(value))
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ClubId, "Unique identifier for a club.");
id_newtype!(MemberId, "Unique identifier for a club member.");
id_newtype!(MeetingId, "Unique identifier for a meeting (réunion).");
id_newtype!(AgendaItemId, "Unique identifier for an agenda item (ordre du jour).");
id_newtype!(GuestId, "Unique identifier for a meeting guest (invité).");

/// Returns `true` when the optional text holds at least one non-whitespace character.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// Reads a field that the API may send as `null`, using the type's default instead.
///
/// Pair with `#[serde(default)]` so a missing field is accepted too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_trimmed_and_blank_ids_rejected() {
        assert_eq!(ClubId::new("  12 ").unwrap().as_str(), "12");
        assert_eq!(MeetingId::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn ids_deserialize_from_strings_and_numbers() {
        let from_text: MemberId = serde_json::from_str("\"m-7\"").unwrap();
        let from_number: MemberId = serde_json::from_str("7").unwrap();

        assert_eq!(from_text.as_str(), "m-7");
        assert_eq!(from_number.as_str(), "7");
        assert!(serde_json::from_str::<MemberId>("\"\"").is_err());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = MeetingId::new("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }

    #[derive(Debug, Deserialize)]
    struct Lenient {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
        #[serde(default, deserialize_with = "null_as_default")]
        flag: bool,
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let nulls: Lenient = serde_json::from_str(r#"{"text": null, "flag": null}"#).unwrap();
        assert_eq!(nulls.text, "");
        assert!(!nulls.flag);

        let missing: Lenient = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.text, "");

        let set: Lenient = serde_json::from_str(r#"{"text": "Salle", "flag": true}"#).unwrap();
        assert_eq!(set.text, "Salle");
        assert!(set.flag);
    }

    #[test]
    fn presence_ignores_whitespace() {
        assert!(is_present(Some("Approved")));
        assert!(!is_present(Some("  \n")));
        assert!(!is_present(None));
    }
}
