//! Backend Module
//!
//! Axum HTTP server for the favorites API.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly
//! - **`auth`** - Password hashing, tokens, signup/signin
//! - **`middleware`** - Token enforcement for protected routes
//! - **`favorites`** - Per-user favorites
//! - **`search`** - Futurama API proxy
//! - **`store`** - Postgres and in-memory store adapters
//! - **`error`** - `ApiError` and its HTTP conversion
//!
//! # Request Flow
//!
//! ```text
//! client ─▶ /api/auth/{signup,signin} ─▶ AuthService ─▶ store + hasher ─▶ token
//! client ─▶ /api/...  ─▶ auth_middleware ─▶ TokenCodec ─▶ handler (AuthUser)
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Favorites list
pub mod favorites;

/// External API proxy
pub mod search;

/// Store adapters
pub mod store;

/// Backend error types
pub mod error;

pub use error::ApiError;
pub use server::{create_app, AppState, ServerConfig};
