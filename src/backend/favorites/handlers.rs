/**
 * Favorites Handlers
 *
 * Protected CRUD over the caller's favorites. The caller is identified by
 * the `AuthUser` extractor, so these handlers must sit behind the auth
 * middleware.
 */

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::ApiError;
use crate::backend::favorites::db::{Favorite, FavoritesStore, NewFavorite};
use crate::backend::middleware::AuthUser;

/// Body of `POST /api/favorites`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateFavoriteRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub pic_url: Option<String>,
}

impl TryFrom<CreateFavoriteRequest> for NewFavorite {
    type Error = ApiError;

    fn try_from(request: CreateFavoriteRequest) -> Result<Self, Self::Error> {
        let name = request
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiError::validation("Name is required"))?;

        Ok(Self {
            name,
            age: request.age,
            species: request.species,
            pic_url: request.pic_url,
        })
    }
}

/// `GET /api/favorites`
pub async fn list_favorites(
    State(store): State<Arc<dyn FavoritesStore>>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    let favorites = store.list_favorites(user.user_id).await?;
    Ok(Json(favorites))
}

/// `POST /api/favorites`
pub async fn create_favorite(
    State(store): State<Arc<dyn FavoritesStore>>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Result<Json<Favorite>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::validation(e.body_text()))?;
    let favorite = NewFavorite::try_from(request)?;

    let created = store.insert_favorite(user.user_id, &favorite).await?;
    tracing::info!("User {} saved favorite {} ({})", user.user_id, created.id, created.name);

    Ok(Json(created))
}

/// `DELETE /api/favorites/{id}`
///
/// Returns the deleted rows, or 404 if the caller owns no favorite with
/// this id.
pub async fn delete_favorite(
    State(store): State<Arc<dyn FavoritesStore>>,
    AuthUser(user): AuthUser,
    favorite_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    let Path(favorite_id) = favorite_id.map_err(|e| {
        tracing::warn!("Rejected favorite id: {}", e.body_text());
        ApiError::validation("Favorite id must be an integer")
    })?;

    let deleted = store.delete_favorite(user.user_id, favorite_id).await?;
    if deleted.is_empty() {
        return Err(ApiError::not_found("Favorite not found"));
    }

    tracing::info!("User {} deleted favorite {}", user.user_id, favorite_id);
    Ok(Json(deleted))
}
