mod hex_bytes;
pub use hex_bytes::*;

mod uint_deserializer;
pub use uint_deserializer::*;
