//! API Route Configuration
//!
//! ## Public
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/signin` - User login
//!
//! ## Protected (token required, including unknown `/api/*` paths)
//! - `GET /api` - Greeting with the caller's id
//! - `GET /api/favorites` - List the caller's favorites
//! - `POST /api/favorites` - Save a favorite
//! - `DELETE /api/favorites/{id}` - Remove a favorite
//! - `GET /api/search/quotes` - Quote search via the Futurama API
//! - `GET /api/search/characters` - Character search via the Futurama API

use axum::{
    middleware,
    response::Json,
    routing::{delete, get},
    Router,
};
use serde_json::{json, Value};

use crate::backend::auth::handlers::auth_routes;
use crate::backend::error::ApiError;
use crate::backend::favorites::{create_favorite, delete_favorite, list_favorites};
use crate::backend::middleware::{auth_middleware, AuthUser};
use crate::backend::search::{search_characters, search_quotes};
use crate::backend::server::state::AppState;

/// `GET /api`
pub async fn api_root(AuthUser(user): AuthUser) -> Json<Value> {
    Json(json!({
        "message": "hello",
        "user_id": user.user_id,
    }))
}

/// Unmatched `/api/*` paths, reached only with a valid token
async fn api_not_found() -> ApiError {
    ApiError::not_found("Not found")
}

/// Routes that require a valid token, relative to `/api`
///
/// The auth layer also wraps the fallback, so an unknown `/api/*` path is
/// 401 without a token and 404 with one.
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(api_root))
        .route("/favorites", get(list_favorites).post(create_favorite))
        .route("/favorites/{id}", delete(delete_favorite))
        .route("/search/quotes", get(search_quotes))
        .route("/search/characters", get(search_characters))
        .fallback(api_not_found)
        .layer(middleware::from_fn_with_state(app_state, auth_middleware))
}

/// Add auth and protected API routes to a router
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .nest("/api/auth", auth_routes())
        .nest("/api", protected_routes(app_state))
}
