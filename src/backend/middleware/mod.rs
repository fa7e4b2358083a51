//! Middleware Module
//!
//! HTTP middleware applied to the router.
//!
//! - **`auth`** - token enforcement for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use futurama_favorites::backend::middleware::auth_middleware;
//! use futurama_favorites::backend::server::AppState;
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/api", get(|| async { "hello" }))
//!         .route_layer(middleware::from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, extract_token, AuthUser, AuthenticatedUser};
