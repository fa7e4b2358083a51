//! Futurama Favorites - Main Library
//!
//! A small HTTP backend exposing a per-user favorites list and a proxy to
//! the Futurama quotes/characters API, gated by token authentication.
//!
//! # Usage
//!
//! ```rust,no_run
//! use futurama_favorites::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let (app, state) = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! state.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`; see `backend::error` for the
//! status code mapping.

/// Backend server-side code
pub mod backend;
