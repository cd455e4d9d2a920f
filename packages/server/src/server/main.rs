// Main entry point for the EventFlow API server

use std::sync::Arc;

use anyhow::{Context, Result};
use eventflow_core::domains::account::MongoUserStore;
use eventflow_core::{server::build_app, Config};
use mongodb::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,eventflow_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting EventFlow API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to MongoDB
    tracing::info!("Connecting to database...");
    let client = Client::with_uri_str(&config.mongo_uri)
        .await
        .context("Failed to connect to MongoDB")?;

    let store = MongoUserStore::new(&client);
    store
        .ensure_indexes()
        .await
        .context("Failed to create unique indexes")?;
    tracing::info!("Database connected");

    // Build application
    let app = build_app(Arc::new(store), &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Explicit client teardown so in-flight operations drain cleanly
    client.shutdown().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
