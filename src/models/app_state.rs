//! Shared state handed to every HTTP handler.
use std::sync::Arc;

use actix_web::web::ThinData;

use crate::domain::RelayRegistry;
use crate::repositories::InMemoryRelayRepository;

pub struct AppState<R = InMemoryRelayRepository> {
    pub registry: Arc<RelayRegistry<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<R> AppState<R> {
    pub fn new(registry: RelayRegistry<R>) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

pub type ThinDataAppState<R = InMemoryRelayRepository> = ThinData<AppState<R>>;
