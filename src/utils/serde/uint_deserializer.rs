//! Deserialization utilities for unsigned call arguments
//!
//! Accepts plain JSON integers, decimal strings and Clarity-style `u`-prefixed
//! literals, so `256`, `"256"` and `"u256"` all decode to `256`.
use std::fmt;

use serde::{de, Deserializer};

#[derive(Debug)]
struct UintVisitor;

impl de::Visitor<'_> for UintVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an unsigned integer, a decimal string or a u-prefixed literal")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let digits = value.strip_prefix('u').unwrap_or(value);
        digits.parse::<u64>().map_err(de::Error::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map_err(|_| de::Error::custom("negative value cannot be converted to uint"))
    }
}

pub fn deserialize_uint<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(UintVisitor)
}
