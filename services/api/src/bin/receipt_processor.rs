//! services/api/src/bin/receipt_processor.rs

use api_lib::{
    adapters::InMemoryReceiptStore,
    config::Config,
    create_router,
    error::ApiError,
    web::AppState,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Build the Receipt Store & Shared AppState ---
    let store = Arc::new(InMemoryReceiptStore::new());
    let app_state = Arc::new(AppState::new(store));

    // --- 3. Create the Web Router ---
    let app = create_router(app_state, &config);

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
