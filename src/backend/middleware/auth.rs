/**
 * Authentication Middleware
 *
 * Gate for protected routes. The token is read from the `Authorization`
 * header, either as `Bearer <token>` or as the bare token, and verified with
 * the `TokenCodec`. On success the user id is attached to the request
 * extensions; on any failure the request is rejected with 401.
 *
 * The middleware never touches the store.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::UserId;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated identity attached by `auth_middleware`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Read the token from the `Authorization` header
///
/// Returns `None` if the header is absent, not valid UTF-8, or empty.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim_start();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Authentication middleware
///
/// 1. Extracts the token from the `Authorization` header
/// 2. Verifies it
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(request.headers()).ok_or_else(|| {
        tracing::warn!("No token on request to {}", request.uri().path());
        ApiError::Unauthorized
    })?;

    let user_id = app_state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Rejects with 401 when the request did not pass through `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
