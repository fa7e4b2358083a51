//! Search Proxy Module
//!
//! Forwards quote and character searches to the Futurama API.

/// Upstream HTTP client
pub mod client;

/// HTTP handlers
pub mod handlers;

pub use client::{SearchClient, DEFAULT_FUTURAMA_API_URL};
pub use handlers::{search_characters, search_quotes, SearchQuery};
