mod config;
mod constants;
mod handlers;
mod state;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use config::Settings;
use depot::FilesystemStorage;
use state::AppState;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing `.env` file is fine, variables can still come from the
    // real environment
    dotenv::dotenv().ok();

    // Initialize tracing with env filter
    // Filter out actix-server worker shutdown messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info")
                    .add_directive("actix_server::worker=warn".parse().unwrap())
                    .add_directive("actix_server::accept=warn".parse().unwrap())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    // Exits with a diagnostic on invalid configuration
    let settings = Settings::parse();

    info!("Starting filedrop server (PID: {})", std::process::id());

    let storage = FilesystemStorage::open(&settings.depot).await.map_err(|e| {
        error!("Failed to open depot: {}", e);
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to open depot: {}", e),
        )
    })?;

    info!(
        "Files will be served from and saved to {:?}",
        storage.depot_dir()
    );
    info!(
        allow_upload = settings.allow_upload,
        allow_download = settings.allow_download,
        size_limit = settings.size_limit,
        "Public URL is {}",
        settings.public_base_url()
    );

    let bind_address = settings.bind_address();
    let state = web::Data::new(AppState::new(settings, Arc::new(storage)));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(bind_address)
    .map_err(|e| {
        error!("Failed to bind to {}: {}", bind_address, e);
        e
    })?;

    info!("Server bound successfully to http://{}", bind_address);

    server.run().await
}
