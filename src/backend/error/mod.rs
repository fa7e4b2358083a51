//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use futurama_favorites::backend::error::ApiError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<()>, ApiError> {
//!     Err(ApiError::validation("name is required"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
