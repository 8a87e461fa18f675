//! This module defines the HTTP routes for relay registry operations.
//! It includes handlers for creating, confirming and reading relays, and for
//! executing batches of contract calls. Handlers delegate to the relay controller.
use crate::{
    api::controllers::relay,
    models::{
        ApiResponse, CallBatchRequest, CallReceipt, CreateRelayRequest, RelayResponse,
        ThinDataAppState,
    },
};
use actix_web::{get, post, web, Responder};

/// Creates a relay and returns its id.
#[utoipa::path(
    post,
    path = "/relays",
    tag = "Relays",
    request_body = CreateRelayRequest,
    responses(
        (status = 200, description = "Relay created", body = ApiResponse<CallReceipt>),
        (status = 400, description = "Relay rejected (code 101)", body = ApiResponse<String>),
    )
)]
#[post("/relays")]
async fn create_relay(
    req: web::Json<CreateRelayRequest>,
    data: ThinDataAppState,
) -> impl Responder {
    relay::create_relay(req.into_inner(), data).await
}

/// Lists every relay in id order.
#[utoipa::path(
    get,
    path = "/relays",
    tag = "Relays",
    responses(
        (status = 200, description = "Relay list", body = ApiResponse<Vec<RelayResponse>>),
    )
)]
#[get("/relays")]
async fn list_relays(data: ThinDataAppState) -> impl Responder {
    relay::list_relays(data).await
}

/// Returns the id the next created relay will receive.
#[utoipa::path(
    get,
    path = "/relays/count",
    tag = "Relays",
    responses(
        (status = 200, description = "Relay count", body = ApiResponse<u64>),
    )
)]
#[get("/relays/count")]
async fn get_relay_count(data: ThinDataAppState) -> impl Responder {
    relay::get_relay_count(data).await
}

/// Retrieves a relay by id.
#[utoipa::path(
    get,
    path = "/relays/{relay_id}",
    tag = "Relays",
    params(
        ("relay_id" = u64, Path, description = "Relay id")
    ),
    responses(
        (status = 200, description = "Relay details", body = ApiResponse<RelayResponse>),
        (status = 404, description = "Relay not found (code 102)", body = ApiResponse<String>),
    )
)]
#[get("/relays/{relay_id}")]
async fn get_relay(relay_id: web::Path<u64>, data: ThinDataAppState) -> impl Responder {
    relay::get_relay(relay_id.into_inner(), data).await
}

/// Confirms a pending relay.
#[utoipa::path(
    post,
    path = "/relays/{relay_id}/confirm",
    tag = "Relays",
    params(
        ("relay_id" = u64, Path, description = "Relay id")
    ),
    responses(
        (status = 200, description = "Relay confirmed", body = ApiResponse<CallReceipt>),
        (status = 404, description = "Relay not found (code 102)", body = ApiResponse<String>),
        (status = 409, description = "Relay already confirmed (code 103)", body = ApiResponse<String>),
    )
)]
#[post("/relays/{relay_id}/confirm")]
async fn confirm_relay(relay_id: web::Path<u64>, data: ThinDataAppState) -> impl Responder {
    relay::confirm_relay(relay_id.into_inner(), data).await
}

/// Executes contract calls in order and returns one receipt per call.
#[utoipa::path(
    post,
    path = "/calls",
    tag = "Calls",
    request_body = CallBatchRequest,
    responses(
        (status = 200, description = "Call receipts", body = ApiResponse<Vec<CallReceipt>>),
    )
)]
#[post("/calls")]
async fn execute_calls(
    req: web::Json<CallBatchRequest>,
    data: ThinDataAppState,
) -> impl Responder {
    relay::execute_calls(req.into_inner(), data).await
}

/// Initializes the routes for the relay module.
///
/// `/relays/count` is registered ahead of `/relays/{relay_id}`.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_relay);
    cfg.service(list_relays);
    cfg.service(get_relay_count);
    cfg.service(get_relay);
    cfg.service(confirm_relay);
    cfg.service(execute_calls);
}
