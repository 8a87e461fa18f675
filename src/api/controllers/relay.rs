//! # Relay Controller
//!
//! Handles HTTP requests for relay creation, confirmation and lookup, plus
//! batched contract calls.

use actix_web::HttpResponse;
use log::debug;

use crate::{
    models::{
        ApiError, ApiResponse, CallBatchRequest, CallReceipt, CreateRelayRequest,
        RelayResponse, ThinDataAppState,
    },
    repositories::RelayRepository,
};

/// Creates a relay. Rejections come back as an [`ApiError::Contract`].
pub async fn create_relay<R>(
    request: CreateRelayRequest,
    state: ThinDataAppState<R>,
) -> Result<HttpResponse, ApiError>
where
    R: RelayRepository + 'static,
{
    let id = state
        .registry
        .create_relay(
            &request.destination_chain,
            &request.message_hash,
            request.payload_size,
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(CallReceipt::ok(id))))
}

pub async fn confirm_relay<R>(id: u64, state: ThinDataAppState<R>) -> Result<HttpResponse, ApiError>
where
    R: RelayRepository + 'static,
{
    let confirmed = state.registry.confirm_relay(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(CallReceipt::ok(confirmed))))
}

pub async fn get_relay<R>(id: u64, state: ThinDataAppState<R>) -> Result<HttpResponse, ApiError>
where
    R: RelayRepository + 'static,
{
    let relay = state.registry.get_relay(id).await?;
    debug!("Relay: {:?}", relay);

    Ok(HttpResponse::Ok().json(ApiResponse::success(RelayResponse::from(relay))))
}

pub async fn list_relays<R>(state: ThinDataAppState<R>) -> Result<HttpResponse, ApiError>
where
    R: RelayRepository + 'static,
{
    let relays: Vec<RelayResponse> = state
        .registry
        .list_relays()
        .await?
        .into_iter()
        .map(RelayResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(relays)))
}

pub async fn get_relay_count<R>(state: ThinDataAppState<R>) -> Result<HttpResponse, ApiError>
where
    R: RelayRepository + 'static,
{
    let count = state.registry.get_relay_count().await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(count)))
}

/// Executes a batch of calls in order. Contract failures are reported in the
/// receipts, so this only fails on transport-level problems.
pub async fn execute_calls<R>(
    request: CallBatchRequest,
    state: ThinDataAppState<R>,
) -> Result<HttpResponse, ApiError>
where
    R: RelayRepository + 'static,
{
    debug!("Executing {} calls", request.calls.len());
    let receipts = state.registry.execute_batch(request.calls).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(receipts)))
}
