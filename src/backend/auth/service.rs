/**
 * Authentication Service
 *
 * `AuthService` composes a `CredentialStore`, a `PasswordHasher` and a
 * `TokenCodec` into the signup and signin operations. HTTP handlers are thin
 * wrappers around these two methods.
 *
 * # Side Effects
 *
 * - signup performs exactly one insert, and only after validation passes
 * - signin never writes
 */

use std::sync::Arc;

use crate::backend::auth::handlers::types::{AuthResponse, Credentials, SigninRequest, SignupRequest};
use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::users::CredentialStore;
use crate::backend::error::ApiError;

/// Verified against when the email is unknown, so both signin failures cost a bcrypt round
const DECOY_PASSWORD: &str = "decoy-password-that-never-matches";

pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    tokens: Arc<TokenCodec>,
    decoy_hash: String,
}

impl AuthService {
    /// Build the service
    ///
    /// Computes one bcrypt hash up front, so construction costs as much as
    /// a single signup.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        tokens: Arc<TokenCodec>,
    ) -> Result<Self, PasswordError> {
        let decoy_hash = hasher.hash(DECOY_PASSWORD)?;
        Ok(Self {
            store,
            hasher,
            tokens,
            decoy_hash,
        })
    }

    /// Register a new user and issue a token
    ///
    /// # Errors
    ///
    /// * `Validation` - missing email or password, bad email, overlong password
    /// * `Conflict` - email already registered
    /// * `Internal` - hashing, store or signing failure
    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError> {
        let credentials = Credentials::try_from(request)?;
        tracing::info!("Signup request for email: {}", credentials.email);

        let password_hash = self.hasher.hash(&credentials.password)?;

        let user = self
            .store
            .insert_user(&credentials.email, &password_hash)
            .await
            .map_err(|e| {
                tracing::warn!("Failed to create user {}: {}", credentials.email, e);
                ApiError::from(e)
            })?;

        let token = self.tokens.issue(user.id)?;

        tracing::info!("User created successfully: {} ({})", user.id, user.email);

        Ok(AuthResponse { token, user })
    }

    /// Check credentials and issue a token
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn signin(&self, request: SigninRequest) -> Result<AuthResponse, ApiError> {
        let credentials = Credentials::try_from(request)?;
        tracing::info!("Signin request for: {}", credentials.email);

        let user = match self.store.select_user(&credentials.email).await? {
            Some(user) => user,
            None => {
                let _ = self.hasher.verify(&credentials.password, &self.decoy_hash);
                tracing::warn!("User not found: {}", credentials.email);
                return Err(ApiError::Unauthorized);
            }
        };

        if !self.hasher.verify(&credentials.password, &user.password_hash) {
            tracing::warn!("Invalid password for user: {}", user.id);
            return Err(ApiError::Unauthorized);
        }

        let token = self.tokens.issue(user.id)?;

        tracing::info!("User signed in successfully: {} ({})", user.id, user.email);

        Ok(AuthResponse {
            token,
            user: (&user).into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use crate::backend::auth::users::{PublicUser, User};
    use crate::backend::store::{MemoryStore, StoreError};

    /// Counts calls into a `MemoryStore`
    #[derive(Default)]
    struct RecordingStore {
        inner: MemoryStore,
        selects: AtomicUsize,
        inserts: AtomicUsize,
    }

    #[async_trait]
    impl CredentialStore for RecordingStore {
        async fn select_user(&self, email: &str) -> Result<Option<User>, StoreError> {
            self.selects.fetch_add(1, Ordering::SeqCst);
            self.inner.select_user(email).await
        }

        async fn insert_user(&self, email: &str, password_hash: &str) -> Result<PublicUser, StoreError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            self.inner.insert_user(email, password_hash).await
        }
    }

    /// Fails every call like a dropped connection
    struct BrokenStore;

    #[async_trait]
    impl CredentialStore for BrokenStore {
        async fn select_user(&self, _email: &str) -> Result<Option<User>, StoreError> {
            Err(StoreError::unavailable("connection reset"))
        }

        async fn insert_user(&self, _email: &str, _password_hash: &str) -> Result<PublicUser, StoreError> {
            Err(StoreError::unavailable("connection reset"))
        }
    }

    fn codec() -> Arc<TokenCodec> {
        Arc::new(TokenCodec::new(b"service-test-secret", Duration::from_secs(3600)))
    }

    fn service(store: Arc<dyn CredentialStore>) -> AuthService {
        AuthService::new(store, PasswordHasher::new(4), codec()).unwrap()
    }

    fn signup_request(email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn signin_request(email: &str, password: &str) -> SigninRequest {
        SigninRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_signup_issues_token_for_new_user() {
        let store = Arc::new(RecordingStore::default());
        let auth = service(store.clone());

        let response = auth.signup(signup_request("a@x.com", "pw123")).await.unwrap();
        assert_eq!(response.user.email, "a@x.com");
        assert_eq!(codec().verify(&response.token).unwrap(), response.user.id);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_signup_stores_hash_not_plaintext() {
        let store = Arc::new(MemoryStore::new());
        let auth = service(store.clone());
        auth.signup(signup_request("a@x.com", "pw123")).await.unwrap();

        let stored = store.select_user("a@x.com").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "pw123");
        assert!(PasswordHasher::new(4).verify("pw123", &stored.password_hash));
    }

    #[tokio::test]
    async fn test_signup_validation_skips_store() {
        let store = Arc::new(RecordingStore::default());
        let auth = service(store.clone());

        let result = auth.signup(SignupRequest::default()).await;
        assert_matches!(result, Err(ApiError::Validation { .. }));
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_conflicts() {
        let store = Arc::new(RecordingStore::default());
        let auth = service(store.clone());
        auth.signup(signup_request("a@x.com", "pw123")).await.unwrap();

        let result = auth.signup(signup_request("a@x.com", "other")).await;
        assert_matches!(result, Err(ApiError::Conflict { .. }));
        assert_eq!(store.inner.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_signin_success_performs_no_writes() {
        let store = Arc::new(RecordingStore::default());
        let auth = service(store.clone());
        let created = auth.signup(signup_request("a@x.com", "pw123")).await.unwrap();

        let response = auth.signin(signin_request("a@x.com", "pw123")).await.unwrap();
        assert_eq!(response.user, created.user);
        assert_eq!(codec().verify(&response.token).unwrap(), created.user.id);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 1);
        assert_eq!(store.selects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_signin_failures_are_indistinguishable() {
        let store = Arc::new(MemoryStore::new());
        let auth = service(store);
        auth.signup(signup_request("a@x.com", "pw123")).await.unwrap();

        let wrong_password = auth.signin(signin_request("a@x.com", "wrong")).await;
        let unknown_email = auth.signin(signin_request("nobody@x.com", "pw123")).await;

        assert_matches!(wrong_password, Err(ApiError::Unauthorized));
        assert_matches!(unknown_email, Err(ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let auth = service(Arc::new(BrokenStore));

        let signin = auth.signin(signin_request("a@x.com", "pw123")).await;
        assert_matches!(signin, Err(ApiError::Internal { .. }));

        let signup = auth.signup(signup_request("a@x.com", "pw123")).await;
        assert_matches!(signup, Err(ApiError::Internal { .. }));
    }
}
