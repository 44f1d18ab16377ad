//! Raw enum values.
//!
//! A [`RawValue`] is the primitive an enum variant serializes to. It encodes
//! as the bare primitive, never as a wrapper object.

use serde::{Serialize, Serializer};
use std::fmt;

/// Primitive literal carried by an enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawValue {
    /// Integer-backed variant.
    Integer(i64),
    /// String-backed variant.
    String(String),
}

impl RawValue {
    /// Returns the integer value, if integer-backed.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::String(_) => None,
        }
    }

    /// Returns the string value, if string-backed.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            Self::Integer(_) => None,
        }
    }

    /// Converts the value into its JSON form.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Integer(v) => serde_json::Value::from(*v),
            Self::String(v) => serde_json::Value::from(v.as_str()),
        }
    }
}

/// Decimal form for integers, the literal itself for strings.
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(v) => serializer.serialize_i64(*v),
            Self::String(v) => serializer.serialize_str(v),
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
