/**
 * PostgreSQL Store
 *
 * `PgStore` wraps a sqlx connection pool. Schema migrations from
 * `migrations/` are applied when the store connects.
 *
 * Email uniqueness is enforced by the `users_email_key` constraint; the
 * resulting unique violation is reported as `StoreError::Conflict`.
 */

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::backend::auth::users::{CredentialStore, PublicUser, User};
use crate::backend::favorites::db::{Favorite, FavoritesStore, NewFavorite};
use crate::backend::store::StoreError;

/// Postgres-backed store for users and favorites
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database and run pending migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created or if a migration
    /// fails. Startup should not continue in either case.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn select_user(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<PublicUser, StoreError> {
        let user = sqlx::query_as::<_, PublicUser>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }
}

#[async_trait]
impl FavoritesStore for PgStore {
    async fn list_favorites(&self, user_id: i32) -> Result<Vec<Favorite>, StoreError> {
        let favorites = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, name, age, species, pic_url, user_id
            FROM favorites
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }

    async fn insert_favorite(&self, user_id: i32, favorite: &NewFavorite) -> Result<Favorite, StoreError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (name, age, species, pic_url, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, age, species, pic_url, user_id
            "#,
        )
        .bind(&favorite.name)
        .bind(&favorite.age)
        .bind(&favorite.species)
        .bind(&favorite.pic_url)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(favorite)
    }

    async fn delete_favorite(&self, user_id: i32, favorite_id: i32) -> Result<Vec<Favorite>, StoreError> {
        let deleted = sqlx::query_as::<_, Favorite>(
            r#"
            DELETE FROM favorites
            WHERE id = $1 AND user_id = $2
            RETURNING id, name, age, species, pic_url, user_id
            "#,
        )
        .bind(favorite_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(deleted)
    }
}
