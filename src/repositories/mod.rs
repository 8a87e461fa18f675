//! # Repository Module
//!
//! Implements the data persistence layer for the relay registry using the
//! Repository pattern.

use crate::models::RepositoryError;
use async_trait::async_trait;

mod relay;
pub use relay::*;

#[cfg(test)]
use mockall::automock;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait Repository<T, ID> {
    async fn create(&self, entity: T) -> Result<T, RepositoryError>;
    async fn get_by_id(&self, id: ID) -> Result<T, RepositoryError>;
    async fn list_all(&self) -> Result<Vec<T>, RepositoryError>;
    async fn update(&self, id: ID, entity: T) -> Result<T, RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}
