/**
 * Signup Handler
 *
 * `POST /api/auth/signup` - validates the body, hashes the password,
 * inserts the user and returns a token.
 *
 * # Responses
 *
 * * `200 OK` - `{token, user: {id, email}}`
 * * `400 Bad Request` - missing or malformed email/password, invalid JSON
 * * `409 Conflict` - email already registered
 * * `500 Internal Server Error` - hashing, store or signing failure
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::ApiError;

/// Sign up handler
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "a@x.com",
///   "password": "pw123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": { "id": 1, "email": "a@x.com" }
/// }
/// ```
pub async fn signup(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected signup body: {}", e.body_text());
        ApiError::validation("Request body must be JSON with email and password")
    })?;

    auth.signup(request).await.map(Json)
}
