#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use config::{ConfigError, ServerConfig};
use services::catalog::{Catalog, CatalogError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("{0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path).await?;
    if catalog.is_empty() {
        tracing::warn!(path = %config.catalog_path.display(), "catalog is empty; every listing will be empty");
    } else {
        tracing::info!(products = catalog.len(), path = %config.catalog_path.display(), "catalog loaded");
    }

    let state = state::AppState::new(catalog);
    let app = routes::app(state, config.cors_origin.clone()).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "shadematch listening");
    axum::serve(listener, app).await?;
    Ok(())
}
