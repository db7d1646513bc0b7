//! Place Repository Implementation
//!
//! PostgreSQL implementation of the PlaceRepository trait. Compound writes
//! (create/delete) keep the `places` row and the creator's ordered
//! `user_places` link row consistent inside one transaction.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Place, PlaceRepository, PlaceWithCreator, User};
use crate::infrastructure::database::{with_query_timeout, with_transaction};
use crate::shared::error::AppError;

/// Database row representation matching the places table schema.
#[derive(Debug, sqlx::FromRow)]
struct PlaceRow {
    id: i64,
    title: String,
    description: String,
    address: String,
    image_url: String,
    creator_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlaceRow {
    /// Convert database row to domain Place entity.
    fn into_place(self) -> Place {
        Place {
            id: self.id,
            title: self.title,
            description: self.description,
            address: self.address,
            image_url: self.image_url,
            creator_id: self.creator_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Row for the place-joined-with-creator query.
#[derive(Debug, sqlx::FromRow)]
struct PlaceWithCreatorRow {
    id: i64,
    title: String,
    description: String,
    address: String,
    image_url: String,
    creator_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_name: String,
    user_email: String,
    user_password_hash: String,
    user_image_url: String,
    user_created_at: DateTime<Utc>,
    user_updated_at: DateTime<Utc>,
}

impl PlaceWithCreatorRow {
    fn into_place_with_creator(self) -> PlaceWithCreator {
        PlaceWithCreator {
            creator: User {
                id: self.creator_id,
                name: self.user_name,
                email: self.user_email,
                password_hash: self.user_password_hash,
                image_url: self.user_image_url,
                created_at: self.user_created_at,
                updated_at: self.user_updated_at,
            },
            place: Place {
                id: self.id,
                title: self.title,
                description: self.description,
                address: self.address,
                image_url: self.image_url,
                creator_id: self.creator_id,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
        }
    }
}

/// PostgreSQL place repository implementation.
#[derive(Clone)]
pub struct PgPlaceRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgPlaceRepository {
    /// Create a new PgPlaceRepository with the given connection pool and
    /// per-query timeout bound.
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    /// Find a place by its internal ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, AppError> {
        let row = with_query_timeout(self.query_timeout, async {
            sqlx::query_as::<_, PlaceRow>(
                r#"
                SELECT id, title, description, address, image_url, creator_id,
                       created_at, updated_at
                FROM places
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
        })
        .await?;

        Ok(row.map(|r| r.into_place()))
    }

    /// Find all places created by a user, in the order they were added to
    /// the user's list.
    async fn find_by_creator(&self, user_id: i64) -> Result<Vec<Place>, AppError> {
        let rows = with_query_timeout(self.query_timeout, async {
            sqlx::query_as::<_, PlaceRow>(
                r#"
                SELECT p.id, p.title, p.description, p.address, p.image_url,
                       p.creator_id, p.created_at, p.updated_at
                FROM places p
                JOIN user_places up ON up.place_id = p.id
                WHERE up.user_id = $1
                ORDER BY up.position ASC
                "#,
            )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
        })
        .await?;

        Ok(rows.into_iter().map(|r| r.into_place()).collect())
    }

    /// Find a place joined with its creator.
    async fn find_with_creator(&self, id: i64) -> Result<Option<PlaceWithCreator>, AppError> {
        let row = with_query_timeout(self.query_timeout, async {
            sqlx::query_as::<_, PlaceWithCreatorRow>(
                r#"
                SELECT p.id, p.title, p.description, p.address, p.image_url,
                       p.creator_id, p.created_at, p.updated_at,
                       u.name AS user_name,
                       u.email AS user_email,
                       u.password_hash AS user_password_hash,
                       u.image_url AS user_image_url,
                       u.created_at AS user_created_at,
                       u.updated_at AS user_updated_at
                FROM places p
                JOIN users u ON u.id = p.creator_id
                WHERE p.id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
        })
        .await?;

        Ok(row.map(|r| r.into_place_with_creator()))
    }

    /// Persist a new place and append it to its creator's ordered place
    /// list. Both writes run in one transaction: if the link insert fails,
    /// the place insert is rolled back and no orphan place survives.
    async fn create(&self, place: &Place) -> Result<Place, AppError> {
        let place = place.clone();

        let row = with_query_timeout(
            self.query_timeout,
            with_transaction(&self.pool, move |tx| {
                Box::pin(async move {
                    let row = sqlx::query_as::<_, PlaceRow>(
                        r#"
                        INSERT INTO places (id, title, description, address, image_url, creator_id)
                        VALUES ($1, $2, $3, $4, $5, $6)
                        RETURNING id, title, description, address, image_url, creator_id,
                                  created_at, updated_at
                        "#,
                    )
                    .bind(place.id)
                    .bind(&place.title)
                    .bind(&place.description)
                    .bind(&place.address)
                    .bind(&place.image_url)
                    .bind(place.creator_id)
                    .fetch_one(&mut **tx)
                    .await?;

                    sqlx::query(
                        r#"
                        INSERT INTO user_places (user_id, place_id, position)
                        SELECT $1, $2, COALESCE(MAX(position) + 1, 0)
                        FROM user_places
                        WHERE user_id = $1
                        "#,
                    )
                    .bind(place.creator_id)
                    .bind(place.id)
                    .execute(&mut **tx)
                    .await?;

                    Ok(row)
                })
            }),
        )
        .await?;

        Ok(row.into_place())
    }

    /// Update an existing place. Single-row write, no transaction needed.
    async fn update(&self, place: &Place) -> Result<Place, AppError> {
        let row = with_query_timeout(self.query_timeout, async {
            sqlx::query_as::<_, PlaceRow>(
                r#"
                UPDATE places
                SET title = $2,
                    description = $3,
                    address = $4,
                    image_url = $5,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, title, description, address, image_url, creator_id,
                          created_at, updated_at
                "#,
            )
            .bind(place.id)
            .bind(&place.title)
            .bind(&place.description)
            .bind(&place.address)
            .bind(&place.image_url)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
        })
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Could not find a place for the provided place id".into())
        })?;

        Ok(row.into_place())
    }

    /// Delete a place and remove it from its creator's ordered place list.
    /// Both deletes run in one transaction.
    async fn delete(&self, place_id: i64, creator_id: i64) -> Result<(), AppError> {
        with_query_timeout(
            self.query_timeout,
            with_transaction(&self.pool, move |tx| {
                Box::pin(async move {
                    sqlx::query("DELETE FROM user_places WHERE user_id = $1 AND place_id = $2")
                        .bind(creator_id)
                        .bind(place_id)
                        .execute(&mut **tx)
                        .await?;

                    let result = sqlx::query("DELETE FROM places WHERE id = $1")
                        .bind(place_id)
                        .execute(&mut **tx)
                        .await?;

                    // The place vanished between fetch and delete; abort so
                    // the link removal does not commit on its own.
                    if result.rows_affected() == 0 {
                        return Err(sqlx::Error::RowNotFound);
                    }

                    Ok(())
                })
            }),
        )
        .await
    }
}
