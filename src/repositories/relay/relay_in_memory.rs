//! In-memory relay store.
//!
//! Records live in a `Vec` indexed by relay id behind a `parking_lot::RwLock`.
//! Nothing is ever removed.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::models::{RelayRepoModel, RepositoryError};
use crate::repositories::Repository;

#[derive(Debug, Default)]
pub struct InMemoryRelayRepository {
    store: RwLock<Vec<RelayRepoModel>>,
}

impl InMemoryRelayRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

fn index_of(id: u64) -> Result<usize, RepositoryError> {
    usize::try_from(id)
        .map_err(|_| RepositoryError::NotFound(format!("Relay with ID {id} not found")))
}

#[async_trait]
impl Repository<RelayRepoModel, u64> for InMemoryRelayRepository {
    async fn create(&self, relay: RelayRepoModel) -> Result<RelayRepoModel, RepositoryError> {
        let mut store = self.store.write();
        let next_id = store.len() as u64;
        if relay.id != next_id {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Relay ID {} does not match next slot {}",
                relay.id, next_id
            )));
        }
        store.push(relay.clone());
        Ok(relay)
    }

    async fn get_by_id(&self, id: u64) -> Result<RelayRepoModel, RepositoryError> {
        let store = self.store.read();
        store
            .get(index_of(id)?)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Relay with ID {id} not found")))
    }

    async fn list_all(&self) -> Result<Vec<RelayRepoModel>, RepositoryError> {
        Ok(self.store.read().clone())
    }

    async fn update(
        &self,
        id: u64,
        relay: RelayRepoModel,
    ) -> Result<RelayRepoModel, RepositoryError> {
        if relay.id != id {
            return Err(RepositoryError::InvalidData(format!(
                "Relay ID {} cannot be changed to {}",
                id, relay.id
            )));
        }

        let mut store = self.store.write();
        let slot = store
            .get_mut(index_of(id)?)
            .ok_or_else(|| RepositoryError::NotFound(format!("Relay with ID {id} not found")))?;
        *slot = relay.clone();
        Ok(relay)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.store.read().len())
    }
}
