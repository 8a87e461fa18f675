//! Hex (de)serialization for byte buffers
//!
//! Buffers are written as `0x`-prefixed lowercase hex. Reading accepts the
//! prefix optionally, so `"0x6869"` and `"6869"` are the same buffer. An empty
//! string (or a bare `0x`) is the empty buffer.
use std::fmt;

use serde::{de, Deserializer, Serializer};

/// Decodes a hex string with an optional `0x` prefix.
pub fn decode_hex_bytes(value: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    hex::decode(digits)
}

pub fn encode_hex_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[derive(Debug)]
struct HexBytesVisitor;

impl de::Visitor<'_> for HexBytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a hex encoded byte string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        decode_hex_bytes(value).map_err(de::Error::custom)
    }
}

pub fn deserialize_hex_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(HexBytesVisitor)
}

pub fn serialize_hex_bytes<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&encode_hex_bytes(bytes))
}
