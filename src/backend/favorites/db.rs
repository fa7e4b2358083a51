/**
 * Favorite Model and Store Trait
 *
 * Favorites are Futurama characters a user has saved. Every operation is
 * scoped to the owning user id.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserId;
use crate::backend::store::StoreError;

/// Stored favorite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: i32,
    pub name: String,
    pub age: Option<String>,
    pub species: Option<String>,
    pub pic_url: Option<String>,
    pub user_id: UserId,
}

/// Validated input for a new favorite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub name: String,
    pub age: Option<String>,
    pub species: Option<String>,
    pub pic_url: Option<String>,
}

/// Persistence boundary for favorites
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// All favorites owned by `user_id`, in insertion order
    async fn list_favorites(&self, user_id: UserId) -> Result<Vec<Favorite>, StoreError>;

    /// Persist a favorite for `user_id`
    async fn insert_favorite(&self, user_id: UserId, favorite: &NewFavorite) -> Result<Favorite, StoreError>;

    /// Delete a favorite if it belongs to `user_id`
    ///
    /// # Returns
    /// The deleted rows; empty if the id does not exist or is owned by
    /// someone else
    async fn delete_favorite(&self, user_id: UserId, favorite_id: i32) -> Result<Vec<Favorite>, StoreError>;
}
