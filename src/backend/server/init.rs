/**
 * Server Initialization
 *
 * 1. Open the store (Postgres when `DATABASE_URL` is set, memory otherwise)
 * 2. Build `AppState`
 * 3. Create the router
 *
 * The caller owns the returned state and is responsible for calling
 * `AppState::close` once the server has stopped.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::routes::router::create_router;
use crate::backend::search::SearchClient;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, StoreError};

/// Errors that abort startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open store: {0}")]
    Store(#[from] StoreError),
    #[error("failed to prepare password hasher: {0}")]
    Password(#[from] PasswordError),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Open the configured store and build the application state
pub async fn build_state(config: &ServerConfig) -> Result<AppState, StartupError> {
    let search = SearchClient::new(config.futurama_api_url.clone())?;

    let state = match &config.database_url {
        Some(url) => AppState::new(config, PgStore::connect(url).await?, search)?,
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not survive a restart.");
            AppState::new(config, MemoryStore::new(), search)?
        }
    };

    Ok(state)
}

/// Create and configure the Axum application
///
/// # Returns
///
/// The router ready to serve, and the state so the caller can close the
/// store after shutdown.
pub async fn create_app(config: &ServerConfig) -> Result<(Router<()>, AppState), StartupError> {
    tracing::info!("Initializing favorites backend server");

    let state = build_state(config).await?;
    let app = create_router(state.clone(), &config.static_dir);

    tracing::info!("Router configured");

    Ok((app, state))
}
