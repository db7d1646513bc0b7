//! Place entity and repository trait.
//!
//! Maps to the `places` table, with an ordered `user_places` link table
//! mirroring each creator's place list.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;
use crate::shared::error::AppError;

/// Represents a place in the directory.
///
/// Maps to the `places` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - title: VARCHAR(255) NOT NULL
/// - description: TEXT NOT NULL
/// - address: VARCHAR(255) NOT NULL
/// - image_url: TEXT NOT NULL
/// - creator_id: BIGINT NOT NULL REFERENCES users(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// `creator_id` is a weak reference: it points at the owning user without
/// implying lifetime ownership in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Title (non-empty)
    pub title: String,

    /// Description (at least 5 characters)
    pub description: String,

    /// Street address (non-empty)
    pub address: String,

    /// URL of the place image
    pub image_url: String,

    /// ID of the owning user
    pub creator_id: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A place joined with its creator, the populate step used by deletion.
#[derive(Debug, Clone)]
pub struct PlaceWithCreator {
    pub place: Place,
    pub creator: User,
}

/// Repository trait for Place data access operations.
///
/// `create` and `delete` are compound writes: they touch the place row and
/// the creator's ordered link row inside a single transaction, so the pair
/// either commits together or not at all. A failure inside that scope
/// surfaces `AppError::Transaction`. `update` touches only the place row
/// and is not transactional.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Find a place by its Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, AppError>;

    /// Find all places created by a user, in insertion order.
    async fn find_by_creator(&self, user_id: i64) -> Result<Vec<Place>, AppError>;

    /// Find a place together with its creator.
    async fn find_with_creator(&self, id: i64) -> Result<Option<PlaceWithCreator>, AppError>;

    /// Persist a new place and append it to its creator's place list,
    /// atomically.
    async fn create(&self, place: &Place) -> Result<Place, AppError>;

    /// Update an existing place (title/description/address/image only).
    async fn update(&self, place: &Place) -> Result<Place, AppError>;

    /// Delete a place and remove it from its creator's place list,
    /// atomically.
    async fn delete(&self, place_id: i64, creator_id: i64) -> Result<(), AppError>;
}
