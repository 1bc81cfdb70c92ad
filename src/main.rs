use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use creatorhub::config::{Cli, Config};
use creatorhub::routes;
use creatorhub::state::AppState;
use creatorhub::store::mongo::MongoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let cli = Cli::parse();
    let config = Config::load(&cli)?;
    tracing::info!(
        "Using database '{}' at {}",
        config.database.name,
        config.database.uri
    );

    // Build the store client; the driver connects lazily, so a down server
    // shows up on first use (and in GET /test), not here.
    let store = MongoStore::connect(&config.database).await?;

    // Build app state and router
    let state = AppState {
        store: Arc::new(store),
        config: config.clone(),
    };
    let app = routes::router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
