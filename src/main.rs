//! Relay Minifier service
//!
//! Serves the relay registry over HTTP.
//!
//! # Environment
//!
//! * `HOST`, `PORT`, `SHUTDOWN_TIMEOUT_SECONDS` - server binding, see `ServerConfig`
//! * `LOG_MODE`, `LOG_LEVEL`, `LOG_DATA_DIR` - logging, see `logging::setup_logging`
use actix_web::{
    middleware::{self, Logger},
    web::ThinData,
    App, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use relay_minifier::{
    api, config::ServerConfig, domain::RelayRegistry, logging, models::AppState,
    repositories::InMemoryRelayRepository,
};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();
    logging::setup_logging();

    let config = ServerConfig::from_env();

    let registry = RelayRegistry::new(InMemoryRelayRepository::new())
        .await
        .wrap_err("Failed to initialize relay registry")?;
    let app_state = AppState::new(registry);

    info!("Starting server on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(ThinData(app_state.clone()))
            .configure(api::routes::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .shutdown_timeout(config.shutdown_timeout_seconds)
    .run()
    .await
    .wrap_err("Server terminated with an error")?;

    Ok(())
}
