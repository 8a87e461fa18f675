//! Shared fixtures: a fresh registry per test, as a freshly deployed contract.

use relay_minifier::{
    domain::RelayRegistry,
    models::{AppState, RegistryCall},
    repositories::InMemoryRelayRepository,
};

use super::logging::init_test_logging;

pub async fn deploy_registry() -> RelayRegistry<InMemoryRelayRepository> {
    init_test_logging();
    RelayRegistry::new(InMemoryRelayRepository::new())
        .await
        .expect("Failed to create registry")
}

pub async fn deploy_app_state() -> AppState {
    AppState::new(deploy_registry().await)
}

pub fn create_relay_call(
    destination_chain: &str,
    message_hash: &[u8],
    payload_size: u64,
) -> RegistryCall {
    RegistryCall::CreateRelay {
        destination_chain: destination_chain.to_string(),
        message_hash: message_hash.to_vec(),
        payload_size,
    }
}

pub fn confirm_relay_call(id: u64) -> RegistryCall {
    RegistryCall::ConfirmRelay { id }
}
