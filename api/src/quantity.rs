//! Provides a single type for the numeric values an Ethereum provider returns.
//!
//! Providers deliver numbers in several shapes: hex strings (`"0x1b4"`), plain
//! JSON numbers, decimal strings, or wrapped objects such as `{"_hex": "0x1b4"}`.
//! [`Quantity`] is decoded once, when a response is deserialized, so nothing
//! downstream has to inspect the shape again.

use std::fmt;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use num_traits::Zero;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;

/// A numeric value returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum Quantity {
    /// A value that fits in 64 bits.
    Fixed(u64),
    /// An arbitrary-precision value too large for `u64`.
    Big(BigUint),
    /// A value wrapped in a `_hex`/`hex` object, kept exactly as delivered.
    Hex(String),
    /// Any other shape, kept as text.
    Raw(String),
}

impl Quantity {
    /// Normalises an arbitrary-precision value, preferring `Fixed` when it fits.
    pub fn from_biguint(value: BigUint) -> Self {
        match value.to_u64() {
            Some(v) => Self::Fixed(v),
            None => Self::Big(value),
        }
    }

    /// Decodes a JSON value of any shape. Never fails.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_u64() {
                Some(v) => Self::Fixed(v),
                None => Self::Raw(n.to_string()),
            },
            Value::String(s) => Self::parse(s),
            Value::Object(map) => {
                let wrapped = map
                    .get("_hex")
                    .and_then(Value::as_str)
                    .or_else(|| map.get("hex").and_then(Value::as_str));
                match wrapped {
                    Some(hex) => Self::Hex(hex.to_string()),
                    None => Self::Raw(value.to_string()),
                }
            }
            other => Self::Raw(other.to_string()),
        }
    }

    /// Parses a `0x`-prefixed hex string or a decimal string.
    ///
    /// Anything else is kept as `Raw`.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let parsed = if let Some(digits) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            if digits.is_empty() {
                Some(BigUint::zero())
            } else {
                BigUint::parse_bytes(digits.as_bytes(), 16)
            }
        } else if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            BigUint::parse_bytes(trimmed.as_bytes(), 10)
        } else {
            None
        };

        match parsed {
            Some(v) => Self::from_biguint(v),
            None => Self::Raw(s.to_string()),
        }
    }

    /// Returns the value as `u64` if it is a decoded integer that fits.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Fixed(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self::Fixed(value)
    }
}

impl From<BigUint> for Quantity {
    fn from(value: BigUint) -> Self {
        Self::from_biguint(value)
    }
}

/// Integers render in decimal; wrapped and raw values render verbatim.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => write!(f, "{}", v),
            Self::Big(v) => write!(f, "{}", v),
            Self::Hex(s) | Self::Raw(s) => f.write_str(s),
        }
    }
}

// Always textual, so no JSON consumer ever sees a number it cannot represent.
impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fixed(v) => serializer.serialize_str(&v.to_string()),
            Self::Big(v) => serializer.serialize_str(&v.to_str_radix(10)),
            Self::Hex(s) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("_hex", s)?;
                map.end()
            }
            Self::Raw(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}
