//! # API Routes Module
//!
//! Configures HTTP routes for the relay registry service.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/relays` - Relay creation, confirmation and lookup
//! * `/calls` - Batched contract calls

pub mod health;
pub mod relay;

use actix_web::web;

use crate::models::ApiError;

/// JSON extraction failures answer with the `ApiResponse` error envelope.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .configure(health::init)
        .configure(relay::init);
}
