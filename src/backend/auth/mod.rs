//! Authentication Module
//!
//! This module handles user registration, credential checks and token
//! issuance.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and the CredentialStore trait
//! ├── password.rs     - bcrypt password hashing
//! ├── sessions.rs     - JWT token codec
//! ├── service.rs      - AuthService (signup / signin)
//! └── handlers/       - HTTP handlers and the auth route builder
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → password hashed → user inserted → token returned
//! 2. **Signin**: email and password → hash verified → token returned
//! 3. **Protected routes**: token in `Authorization` → verified by the auth middleware
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs; no server-side session state
//! - Invalid credentials and invalid tokens return the same 401 body

/// User data model and credential store trait
pub mod users;

/// Password hashing
pub mod password;

/// JWT token issuance and verification
pub mod sessions;

/// Signup and signin operations
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{auth_routes, signin, signup, AuthResponse, SigninRequest, SignupRequest};
pub use password::PasswordHasher;
pub use service::AuthService;
pub use sessions::{TokenCodec, TokenError};
pub use users::{CredentialStore, PublicUser, User, UserId};
