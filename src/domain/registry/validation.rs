//! Input gate for `create-relay`.
//!
//! Every failed check reports [`RegistryError::InvalidMessage`]; the specific
//! cause is only visible in the logs.

use log::warn;

use crate::models::RegistryError;

fn is_printable_ascii(value: &str) -> bool {
    value.bytes().all(|b| (0x20..=0x7e).contains(&b))
}

fn rejection_reason(
    destination_chain: &str,
    message_hash: &[u8],
    payload_size: u64,
) -> Option<&'static str> {
    if destination_chain.is_empty() {
        Some("destination chain is empty")
    } else if !is_printable_ascii(destination_chain) {
        Some("destination chain is not printable ascii")
    } else if message_hash.is_empty() {
        Some("message hash is empty")
    } else if payload_size == 0 {
        Some("payload size is zero")
    } else {
        None
    }
}

pub fn validate_relay_params(
    destination_chain: &str,
    message_hash: &[u8],
    payload_size: u64,
) -> Result<(), RegistryError> {
    match rejection_reason(destination_chain, message_hash, payload_size) {
        Some(reason) => {
            warn!("Rejected relay to {:?}: {}", destination_chain, reason);
            Err(RegistryError::InvalidMessage)
        }
        None => Ok(()),
    }
}
