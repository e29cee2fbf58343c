mod models;
mod handlers;
mod routes;
mod docs;
mod config;

use routes::create_routes;
use config::Config;
use tracing::{info, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use std::panic;

#[tokio::main]
async fn main() {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Load configuration
    let (config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("email_buddy=debug,tower_http=debug,axum::rejection=trace,{}", config.log_level).into()
        }))
        .init();

    if let Some(e) = config_err {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
    } else {
        info!("✅ Configuration loaded successfully");
    }

    info!("Starting {} ({})...", config.service_name, config.environment);

    if config.allowed_origins().is_none() && !config.is_development() {
        warn!("CORS allows any origin outside development; set CORS_ORIGINS to restrict it");
    }

    let app_routes = create_routes(&config);

    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("🚀 Server running on http://{}", config.server_address());
    info!("📚 Swagger UI available at http://{}/swagger", config.server_address());

    axum::serve(listener, app_routes)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed to start");

    info!("Server stopped");
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("🛑 Received Ctrl-C, shutting down"),
        Err(e) => error!("Failed to listen for Ctrl-C signal: {}", e),
    }
}
