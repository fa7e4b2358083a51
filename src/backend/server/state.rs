/**
 * Application State
 *
 * `AppState` is the central state container handed to the router. It is
 * cheap to clone; everything inside is behind an `Arc` or is itself a
 * shared handle.
 *
 * The `FromRef` implementations let handlers extract only the part of the
 * state they need, e.g. `State<Arc<AuthService>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::users::CredentialStore;
use crate::backend::favorites::db::FavoritesStore;
use crate::backend::search::SearchClient;
use crate::backend::server::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    /// Signup and signin
    pub auth: Arc<AuthService>,

    /// Token verification for the auth middleware
    ///
    /// The signing secret inside is read-only after startup.
    pub tokens: Arc<TokenCodec>,

    /// User records
    pub credentials: Arc<dyn CredentialStore>,

    /// Favorites, usually backed by the same store as `credentials`
    pub favorites: Arc<dyn FavoritesStore>,

    /// Futurama API client
    pub search: SearchClient,
}

impl AppState {
    /// Build the state around a store that backs both users and favorites
    pub fn new<S>(config: &ServerConfig, store: S, search: SearchClient) -> Result<Self, PasswordError>
    where
        S: CredentialStore + FavoritesStore + 'static,
    {
        let store = Arc::new(store);
        let credentials: Arc<dyn CredentialStore> = store.clone();
        let favorites: Arc<dyn FavoritesStore> = store;

        let tokens = Arc::new(TokenCodec::new(config.jwt_secret.as_bytes(), config.token_ttl));
        let hasher = PasswordHasher::new(config.bcrypt_cost);
        let auth = Arc::new(AuthService::new(credentials.clone(), hasher, tokens.clone())?);

        Ok(Self {
            auth,
            tokens,
            credentials,
            favorites,
            search,
        })
    }

    /// Close the underlying store
    pub async fn close(&self) {
        self.credentials.close().await;
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for Arc<TokenCodec> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn FavoritesStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.favorites.clone()
    }
}

impl FromRef<AppState> for SearchClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.search.clone()
    }
}
