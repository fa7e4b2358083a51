/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the signup and signin handlers.
 * Request fields are optional so that a missing field is reported as a
 * validation error rather than a deserialization failure.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::password::MAX_PASSWORD_BYTES;
use crate::backend::auth::users::PublicUser;
use crate::backend::error::ApiError;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct SignupRequest {
    /// User's email address
    #[serde(default)]
    pub email: Option<String>,
    /// User's password (will be hashed before storage)
    #[serde(default)]
    pub password: Option<String>,
}

/// Sign in request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct SigninRequest {
    /// User's email address
    #[serde(default)]
    pub email: Option<String>,
    /// User's password (will be verified against stored hash)
    #[serde(default)]
    pub password: Option<String>,
}

/// Auth response
///
/// Returned by signup and signin. Never contains the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed token for the `Authorization` header
    pub token: String,
    /// User information (without sensitive data)
    pub user: PublicUser,
}

/// Validated email and password pair
#[derive(Debug, Clone)]
pub(crate) struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    fn parse(email: Option<String>, password: Option<String>) -> Result<Self, ApiError> {
        let email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| ApiError::validation("Email is required"))?;

        let password = password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::validation("Password is required"))?;

        Ok(Self { email, password })
    }
}

impl TryFrom<SignupRequest> for Credentials {
    type Error = ApiError;

    fn try_from(request: SignupRequest) -> Result<Self, Self::Error> {
        let credentials = Self::parse(request.email, request.password)?;

        if !credentials.email.contains('@') {
            return Err(ApiError::validation("Invalid email format"));
        }
        if credentials.password.len() > MAX_PASSWORD_BYTES {
            return Err(ApiError::validation("Password must be at most 72 bytes"));
        }

        Ok(credentials)
    }
}

impl TryFrom<SigninRequest> for Credentials {
    type Error = ApiError;

    fn try_from(request: SigninRequest) -> Result<Self, Self::Error> {
        Self::parse(request.email, request.password)
    }
}
