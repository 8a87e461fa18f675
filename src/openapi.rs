use crate::{
    api::routes::{health, relay},
    models,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    tags((name = "Relay Minifier API")),
    info(description = "Cross-chain relay registry API", version = "0.1.0", title = "Relay Minifier API"),
    paths(
        health::health_check,
        relay::create_relay,
        relay::list_relays,
        relay::get_relay_count,
        relay::get_relay,
        relay::confirm_relay,
        relay::execute_calls,
    ),
    components(schemas(
        models::RelayResponse,
        models::RelayStatus,
        models::CreateRelayRequest,
        models::CallBatchRequest,
        models::RegistryCall,
        models::CallReceipt,
        models::CallValue,
        models::ReceiptType,
    ))
)]
pub struct ApiDoc;
