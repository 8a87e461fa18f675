use thiserror::Error;

use super::RepositoryError;
use crate::constants::{
    ERR_ALREADY_CONFIRMED, ERR_INVALID_MESSAGE, ERR_RELAY_NOT_FOUND, ERR_STORAGE,
};

/// Failure of a registry call. Every variant maps to one contract error code.
///
/// `InvalidMessage` carries no detail: every rejected
/// `create-relay` reports the same code.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid relay message")]
    InvalidMessage,

    #[error("Relay {0} not found")]
    RelayNotFound(u64),

    #[error("Relay {0} is already confirmed")]
    AlreadyConfirmed(u64),

    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),
}

impl RegistryError {
    pub fn code(&self) -> u64 {
        match self {
            RegistryError::InvalidMessage => ERR_INVALID_MESSAGE,
            RegistryError::RelayNotFound(_) => ERR_RELAY_NOT_FOUND,
            RegistryError::AlreadyConfirmed(_) => ERR_ALREADY_CONFIRMED,
            RegistryError::Storage(_) => ERR_STORAGE,
        }
    }
}
