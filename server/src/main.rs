//! Shelf Server binary.

use shelf_server::config::Config;
use shelf_server::store::FileStore;
use shelf_server::{app, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting Shelf Server on {}:{}", config.host, config.port);

    // Prepare the data file
    let store = FileStore::new(&config.data_file);
    if store.ensure_exists()? {
        tracing::info!("Created empty catalog at {}", store.path().display());
    }
    tracing::info!(
        "Using catalog {} (id strategy: {:?})",
        store.path().display(),
        config.id_strategy
    );

    let addr = config.bind_addr();
    let state = AppState::new(Arc::new(store), config);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
