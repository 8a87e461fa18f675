//! # Relay Registry
//!
//! The registry validates relay requests, assigns sequential ids and drives
//! each relay through its `Pending -> Confirmed` lifecycle.
//!
//! ## Execution model
//!
//! Mutating calls run one at a time. The mutex around the next-id counter is
//! held for the whole call, so a call either completes or leaves the store
//! and the counter exactly as they were.

mod validation;
pub use validation::*;

use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::models::{
    CallReceipt, RegistryCall, RegistryError, RelayRepoModel, RelayStatus, RepositoryError,
};
use crate::repositories::{RelayRepository, Repository};

pub struct RelayRegistry<R> {
    repository: R,
    next_id: Mutex<u64>,
}

impl<R: RelayRepository> RelayRegistry<R> {
    /// Builds a registry on top of `repository`, resuming the id sequence
    /// after any relays it already holds.
    pub async fn new(repository: R) -> Result<Self, RegistryError> {
        let next_id = repository.count().await? as u64;
        debug!("Relay registry starting at id {}", next_id);
        Ok(Self {
            repository,
            next_id: Mutex::new(next_id),
        })
    }

    /// `create-relay`: records a new pending relay and returns its id.
    pub async fn create_relay(
        &self,
        destination_chain: &str,
        message_hash: &[u8],
        payload_size: u64,
    ) -> Result<u64, RegistryError> {
        let mut next_id = self.next_id.lock().await;
        self.create_relay_locked(&mut next_id, destination_chain, message_hash, payload_size)
            .await
    }

    /// `confirm-relay`: moves a pending relay to confirmed.
    pub async fn confirm_relay(&self, id: u64) -> Result<bool, RegistryError> {
        let _guard = self.next_id.lock().await;
        self.confirm_relay_locked(id).await
    }

    pub async fn get_relay(&self, id: u64) -> Result<RelayRepoModel, RegistryError> {
        debug!("Fetching relay {}", id);
        self.repository.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound(_) => RegistryError::RelayNotFound(id),
            other => RegistryError::Storage(other),
        })
    }

    /// The id the next successful `create-relay` will receive.
    pub async fn get_relay_count(&self) -> u64 {
        *self.next_id.lock().await
    }

    pub async fn list_relays(&self) -> Result<Vec<RelayRepoModel>, RegistryError> {
        Ok(self.repository.list_all().await?)
    }

    /// Runs a single call and reports its outcome as a receipt.
    pub async fn execute(&self, call: RegistryCall) -> CallReceipt {
        let mut next_id = self.next_id.lock().await;
        self.execute_locked(&mut next_id, call).await
    }

    /// Runs `calls` in order without interleaving other callers. A failed
    /// call yields an `err` receipt and does not stop the rest.
    pub async fn execute_batch(&self, calls: Vec<RegistryCall>) -> Vec<CallReceipt> {
        let mut next_id = self.next_id.lock().await;
        let mut receipts = Vec::with_capacity(calls.len());
        for call in calls {
            receipts.push(self.execute_locked(&mut next_id, call).await);
        }
        receipts
    }

    async fn execute_locked(&self, next_id: &mut u64, call: RegistryCall) -> CallReceipt {
        let function = call.function_name();
        let receipt: CallReceipt = match call {
            RegistryCall::CreateRelay {
                destination_chain,
                message_hash,
                payload_size,
            } => self
                .create_relay_locked(next_id, &destination_chain, &message_hash, payload_size)
                .await
                .into(),
            RegistryCall::ConfirmRelay { id } => self.confirm_relay_locked(id).await.into(),
        };
        debug!("{} -> {:?}", function, receipt);
        receipt
    }

    async fn create_relay_locked(
        &self,
        next_id: &mut u64,
        destination_chain: &str,
        message_hash: &[u8],
        payload_size: u64,
    ) -> Result<u64, RegistryError> {
        validate_relay_params(destination_chain, message_hash, payload_size)?;

        let id = *next_id;
        let following = id.checked_add(1).ok_or_else(|| {
            RegistryError::Storage(RepositoryError::ConstraintViolation(
                "relay id space exhausted".to_string(),
            ))
        })?;
        let relay = RelayRepoModel::new_pending(
            id,
            destination_chain.to_string(),
            message_hash.to_vec(),
            payload_size,
        );
        self.repository.create(relay).await?;
        *next_id = following;

        info!(
            "Created relay {} to {} ({} bytes)",
            id, destination_chain, payload_size
        );
        Ok(id)
    }

    async fn confirm_relay_locked(&self, id: u64) -> Result<bool, RegistryError> {
        let mut relay = match self.repository.get_by_id(id).await {
            Ok(relay) => relay,
            Err(RepositoryError::NotFound(_)) => {
                warn!("Cannot confirm relay {}: not found", id);
                return Err(RegistryError::RelayNotFound(id));
            }
            Err(e) => return Err(e.into()),
        };

        if !relay.is_pending() {
            warn!("Cannot confirm relay {}: already {}", id, relay.status);
            return Err(RegistryError::AlreadyConfirmed(id));
        }

        relay.status = RelayStatus::Confirmed;
        self.repository.update(id, relay).await?;

        info!("Confirmed relay {}", id);
        Ok(true)
    }
}
