//! Relay records and the call/receipt types of the registry interface.

mod request;
pub use request::*;

mod response;
pub use response::*;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Lifecycle state of a relay. `Confirmed` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RelayStatus {
    Pending,
    Confirmed,
}

/// A relay record as held by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRepoModel {
    pub id: u64,
    pub destination_chain: String,
    pub message_hash: Vec<u8>,
    pub payload_size: u64,
    pub status: RelayStatus,
}

impl RelayRepoModel {
    /// Creates a fresh `Pending` relay. Callers validate the fields first.
    pub fn new_pending(
        id: u64,
        destination_chain: String,
        message_hash: Vec<u8>,
        payload_size: u64,
    ) -> Self {
        Self {
            id,
            destination_chain,
            message_hash,
            payload_size,
            status: RelayStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RelayStatus::Pending
    }
}
