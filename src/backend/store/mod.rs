//! Storage Module
//!
//! Concrete adapters behind the `CredentialStore` and `FavoritesStore`
//! traits. Both adapters implement both traits so a single handle can back
//! the whole application.
//!
//! - **`postgres`** - `PgStore`, sqlx connection pool plus migrations
//! - **`memory`** - `MemoryStore`, used when `DATABASE_URL` is unset and in tests
//!
//! A store handle is opened once at startup, shared through `AppState`, and
//! closed after the server has shut down.

use thiserror::Error;

/// PostgreSQL adapter
pub mod postgres;

/// In-memory adapter
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors surfaced by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint was violated (duplicate email)
    #[error("email already registered")]
    Conflict,

    /// Query or connection failure
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Schema migration failure
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store cannot serve requests
    #[error("store unavailable: {message}")]
    Unavailable {
        /// Human-readable error message
        message: String,
    },
}

impl StoreError {
    /// Create a new unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => Self::Conflict,
            other => Self::Database(other),
        }
    }
}
