//! Bookshelf server
//!
//! Usage: `bookshelf [CONFIG.yaml]`
//!
//! Without a config file the server listens on 0.0.0.0:4000 and serves the
//! built-in catalog.

use anyhow::{Context, Result};
use bookshelf::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_yaml_file(&path)
            .with_context(|| format!("loading configuration from {path}"))?,
        None => AppConfig::default(),
    };

    setup_logging(&config.logging.level);

    let catalog = match &config.data.path {
        Some(path) => InMemoryCatalog::from_yaml_file(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => InMemoryCatalog::seeded(),
    };

    tracing::info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    ServerBuilder::new()
        .with_config(config)
        .with_store(catalog)
        .serve()
        .await?;

    Ok(())
}

fn setup_logging(level: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}
