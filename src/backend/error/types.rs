/**
 * Backend Error Types
 *
 * This module defines the error taxonomy surfaced at the HTTP boundary.
 * Every handler returns `Result<_, ApiError>` and the conversion module
 * turns the error into a status code and a JSON body.
 *
 * # Error Categories
 *
 * - `Validation` - missing or malformed input (400)
 * - `Conflict` - duplicate email on signup (409)
 * - `Unauthorized` - bad credentials, missing/bad/expired token (401)
 * - `NotFound` - the resource does not exist for this caller (404)
 * - `Upstream` - the external quotes API failed (502)
 * - `Internal` - store or hashing failure (500)
 *
 * `Unauthorized`, `Upstream` and `Internal` carry no client-visible detail.
 * Whatever context they hold is for the logs.
 */

use thiserror::Error;
use axum::http::StatusCode;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message, returned to the client
        message: String,
    },

    /// A unique constraint was violated
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message, returned to the client
        message: String,
    },

    /// Authentication failed for any reason
    #[error("Unauthorized")]
    Unauthorized,

    /// The requested resource does not exist for the caller
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message, returned to the client
        message: String,
    },

    /// The external API returned an error or could not be reached
    #[error("Upstream error: {message}")]
    Upstream {
        /// Log-only detail
        message: String,
    },

    /// Unexpected server-side failure
    #[error("Internal error: {message}")]
    Internal {
        /// Log-only detail
        message: String,
    },
}

impl ApiError {
    /// Create a new validation error
    ///
    /// # Example
    ///
    /// ```rust
    /// use futurama_favorites::backend::error::ApiError;
    ///
    /// let err = ApiError::validation("email is required");
    /// ```
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Conflict` - 409 Conflict
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Upstream` - 502 Bad Gateway
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    ///
    /// Server-side failures never leak their detail.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::NotFound { message } => message.clone(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::Upstream { .. } => "Upstream service error".to_string(),
            Self::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => Self::conflict("Email already registered"),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(e) => Self::internal(format!("failed to sign token: {e}")),
            TokenError::ExpiryOverflow => Self::internal(err.to_string()),
            _ => Self::Unauthorized,
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooLong => Self::validation(err.to_string()),
            PasswordError::Bcrypt(e) => Self::internal(format!("failed to hash password: {e}")),
        }
    }
}
