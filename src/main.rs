use actix_web::{App, HttpServer, web};
use mydumbbell::data::file::FileStorage;
use mydumbbell::data::store::Store;
use mydumbbell::infrastructure::config::AppConfig;
use mydumbbell::infrastructure::logging::init_logging;
use mydumbbell::presentation::handlers::AppState;
use mydumbbell::presentation::middleware::RequestTracing;
use mydumbbell::presentation::routes::configure;
use std::sync::Arc;
use tracing::{error, info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> std::io::Result<()> {
    init_logging();
    info!("Logging initialized successfully");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    info!(data_dir = %config.data_dir.display(), "Configuration loaded");

    let storage = FileStorage::open(config.data_dir.clone())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to open data directory");
            std::io::Error::other(e.to_string())
        })?;
    let state = AppState::open(Store::new(Arc::new(storage)))
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to load stored data");
            std::io::Error::other(e.to_string())
        })?;
    let state = web::Data::new(state);
    info!("Application state initialized");

    let server = HttpServer::new(move || {
        tracing::trace!("Creating new application instance");
        App::new()
            .app_data(state.clone())
            .wrap(RequestTracing)
            .configure(configure)
    });

    let bind_addr = config.bind_addr();
    info!(address = %bind_addr, "Binding server to address");
    let server = server.bind((config.host.as_str(), config.port))?;

    info!(address = %bind_addr, "Starting HTTP server");
    server.run().await
}
