//! This module provides the health check endpoint for the API.
//!
//! The `/health` endpoint can be used to verify that the service is running and responsive.
use actix_web::{get, web, HttpResponse};

use crate::api::controllers::health;

/// Service liveness check.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = String, example = json!("OK")),
    )
)]
#[get("/health")]
async fn health_check() -> Result<HttpResponse, actix_web::Error> {
    health::health().await
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}
