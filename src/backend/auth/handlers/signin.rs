/**
 * Signin Handler
 *
 * `POST /api/auth/signin` - checks the credentials and returns a token.
 *
 * # Responses
 *
 * * `200 OK` - `{token, user: {id, email}}`
 * * `400 Bad Request` - missing email/password, invalid JSON
 * * `401 Unauthorized` - unknown email or wrong password (same body for both)
 * * `500 Internal Server Error` - store or signing failure
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, SigninRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::ApiError;

/// Sign in handler
pub async fn signin(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<SigninRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected signin body: {}", e.body_text());
        ApiError::validation("Request body must be JSON with email and password")
    })?;

    auth.signin(request).await.map(Json)
}
