//! Relay repository module.
//!
//! Relays are stored append-only: a relay's id is its position in the store,
//! so `create` only accepts the id equal to the current count.

mod relay_in_memory;
pub use relay_in_memory::*;

use crate::models::RelayRepoModel;

use super::Repository;

/// Storage backing a [`crate::domain::RelayRegistry`].
pub trait RelayRepository: Repository<RelayRepoModel, u64> + Send + Sync {}

impl<T> RelayRepository for T where T: Repository<RelayRepoModel, u64> + Send + Sync {}
