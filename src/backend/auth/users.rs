/**
 * User Model and Credential Store
 *
 * This module defines the user record and the `CredentialStore` capability
 * the auth service depends on. Concrete adapters live in `backend::store`.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::backend::store::StoreError;

/// User identifier (Postgres `SERIAL`)
pub type UserId = i32;

/// User struct representing a stored user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: UserId,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
}

/// User information that is safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PublicUser {
    /// Unique user ID
    pub id: UserId,
    /// User email address
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Persistence boundary for user records
///
/// Implementations must enforce email uniqueness themselves and report a
/// duplicate insert as `StoreError::Conflict`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user by email
    ///
    /// # Returns
    /// The stored user or `None` if no user has this email
    async fn select_user(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new user
    ///
    /// # Arguments
    /// * `email` - User email
    /// * `password_hash` - Hashed password
    ///
    /// # Returns
    /// The created user without its hash, or `StoreError::Conflict` if the
    /// email is already registered
    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<PublicUser, StoreError>;

    /// Release any resources held by the store
    async fn close(&self) {}
}
