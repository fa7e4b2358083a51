//! Favorites Module
//!
//! Per-user list of saved characters.
//!
//! - **`db`** - `Favorite` model and the `FavoritesStore` trait
//! - **`handlers`** - `GET`/`POST /api/favorites`, `DELETE /api/favorites/{id}`

/// Favorite model and store trait
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::{Favorite, FavoritesStore, NewFavorite};
pub use handlers::{create_favorite, delete_favorite, list_favorites, CreateFavoriteRequest};
