/**
 * In-Memory Store
 *
 * `MemoryStore` keeps users and favorites in process memory behind a
 * `tokio::sync::RwLock`. It is used when no `DATABASE_URL` is configured and
 * throughout the test suite. Data is lost on restart.
 */

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::auth::users::{CredentialStore, PublicUser, User, UserId};
use crate::backend::favorites::db::{Favorite, FavoritesStore, NewFavorite};
use crate::backend::store::StoreError;

#[derive(Debug, Default)]
struct MemoryState {
    /// Users keyed by email
    users: HashMap<String, User>,
    next_user_id: UserId,
    favorites: BTreeMap<i32, Favorite>,
    next_favorite_id: i32,
}

/// Process-local store for users and favorites
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn select_user(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.state.read().await.users.get(email).cloned())
    }

    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<PublicUser, StoreError> {
        let mut state = self.state.write().await;
        if state.users.contains_key(email) {
            return Err(StoreError::Conflict);
        }

        state.next_user_id += 1;
        let user = User {
            id: state.next_user_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        let public = PublicUser::from(&user);
        state.users.insert(user.email.clone(), user);

        Ok(public)
    }
}

#[async_trait]
impl FavoritesStore for MemoryStore {
    async fn list_favorites(&self, user_id: i32) -> Result<Vec<Favorite>, StoreError> {
        Ok(self
            .state
            .read()
            .await
            .favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_favorite(&self, user_id: i32, favorite: &NewFavorite) -> Result<Favorite, StoreError> {
        let mut state = self.state.write().await;
        state.next_favorite_id += 1;
        let favorite = Favorite {
            id: state.next_favorite_id,
            name: favorite.name.clone(),
            age: favorite.age.clone(),
            species: favorite.species.clone(),
            pic_url: favorite.pic_url.clone(),
            user_id,
        };
        state.favorites.insert(favorite.id, favorite.clone());
        Ok(favorite)
    }

    async fn delete_favorite(&self, user_id: i32, favorite_id: i32) -> Result<Vec<Favorite>, StoreError> {
        let mut state = self.state.write().await;
        let owned = state
            .favorites
            .get(&favorite_id)
            .is_some_and(|f| f.user_id == user_id);

        if !owned {
            return Ok(Vec::new());
        }

        Ok(state.favorites.remove(&favorite_id).into_iter().collect())
    }
}
