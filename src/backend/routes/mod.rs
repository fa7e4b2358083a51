//! Route Configuration Module
//!
//! - **`router`** - Main router creation, static files, fallback, layers
//! - **`api_routes`** - Auth routes and the protected API

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

pub use router::create_router;
