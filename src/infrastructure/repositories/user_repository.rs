//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{User, UserRepository};
use crate::infrastructure::database::with_query_timeout;
use crate::shared::error::AppError;

/// Database row representation matching the users table schema.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    image_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert database row to domain User entity.
    fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool and
    /// per-query timeout bound.
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    /// Find a user by their internal ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = with_query_timeout(self.query_timeout, async {
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT id, name, email, password_hash, image_url, created_at, updated_at
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
        })
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    /// Find a user by their email address. The caller is expected to have
    /// normalized the email first.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = with_query_timeout(self.query_timeout, async {
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT id, name, email, password_hash, image_url, created_at, updated_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
        })
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    /// Check if an email address is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        with_query_timeout(self.query_timeout, async {
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)
        })
        .await
    }

    /// Create a new user in the database.
    async fn create(&self, user: &User) -> Result<User, AppError> {
        let row = with_query_timeout(self.query_timeout, async {
            sqlx::query_as::<_, UserRow>(
                r#"
                INSERT INTO users (id, name, email, password_hash, image_url)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, email, password_hash, image_url, created_at, updated_at
                "#,
            )
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.image_url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AppError::Conflict(
                        "There already exists a user with the entered email. Try logging in instead"
                            .to_string(),
                    )
                }
                _ => AppError::Database(e),
            })
        })
        .await?;

        Ok(row.into_user())
    }

    /// List all users, oldest first.
    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let rows = with_query_timeout(self.query_timeout, async {
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT id, name, email, password_hash, image_url, created_at, updated_at
                FROM users
                ORDER BY created_at ASC
                "#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
        })
        .await?;

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }
}
