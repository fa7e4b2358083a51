//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Route builder and exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── signin.rs   - User authentication handler
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use futurama_favorites::backend::auth::handlers::auth_routes;
//! use futurama_favorites::backend::server::AppState;
//! use axum::Router;
//!
//! fn api() -> Router<AppState> {
//!     Router::new().nest("/api/auth", auth_routes())
//! }
//! ```

use axum::{routing::post, Router};

use crate::backend::server::state::AppState;

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

pub use types::{AuthResponse, SigninRequest, SignupRequest};
pub use signup::signup;
pub use signin::signin;

/// Public authentication routes
///
/// - `POST /signup`
/// - `POST /signin`
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}
