//! Place Service
//!
//! Owns the cross-entity consistency logic for places. The two compound
//! state transitions (create-and-attach, delete-and-detach) must appear
//! atomic to readers: the place row and the creator's place list either
//! change together or not at all. Updates touch only the place row and
//! need no transaction.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::config::AssetSettings;
use crate::domain::{Place, PlaceRepository, UserRepository};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// Place service trait for dependency injection
#[async_trait]
pub trait PlaceService: Send + Sync {
    /// Get a single place by ID
    async fn get_place(&self, place_id: i64) -> Result<PlaceDto, PlaceError>;

    /// Get all places created by a user, in insertion order
    async fn get_places_for_user(&self, user_id: i64) -> Result<Vec<PlaceDto>, PlaceError>;

    /// Create a place and attach it to its creator's place list, atomically
    async fn create_place(&self, request: CreatePlaceDto) -> Result<PlaceDto, PlaceError>;

    /// Update a place's title and description (single-document write)
    async fn update_place(
        &self,
        place_id: i64,
        update: UpdatePlaceDto,
    ) -> Result<PlaceDto, PlaceError>;

    /// Delete a place and detach it from its creator's place list, atomically
    async fn delete_place(&self, place_id: i64) -> Result<(), PlaceError>;
}

/// Create place request
#[derive(Debug, Clone)]
pub struct CreatePlaceDto {
    pub title: String,
    pub description: String,
    pub address: String,
    pub creator_id: i64,
}

/// Update place request
#[derive(Debug, Clone)]
pub struct UpdatePlaceDto {
    pub title: String,
    pub description: String,
}

/// Place data transfer object. IDs are stringified so the storage
/// representation never leaks raw to the boundary.
#[derive(Debug, Clone)]
pub struct PlaceDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub image_url: String,
    pub creator: String,
    pub created_at: String,
}

impl From<Place> for PlaceDto {
    fn from(place: Place) -> Self {
        Self {
            id: place.id.to_string(),
            title: place.title,
            description: place.description,
            address: place.address,
            image_url: place.image_url,
            creator: place.creator_id.to_string(),
            created_at: place.created_at.to_rfc3339(),
        }
    }
}

/// Place service errors
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    #[error("Place not found")]
    NotFound,

    #[error("Creator not found")]
    CreatorNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Transaction aborted: {0}")]
    Transaction(String),

    #[error("Store call timed out")]
    Timeout,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl PlaceError {
    /// Map a repository failure, preserving the transaction/timeout kinds.
    fn from_repo(err: AppError) -> Self {
        match err {
            AppError::Transaction(msg) => PlaceError::Transaction(msg),
            AppError::Timeout => PlaceError::Timeout,
            other => PlaceError::Storage(other.to_string()),
        }
    }
}

/// PlaceService implementation
pub struct PlaceServiceImpl<P, U>
where
    P: PlaceRepository,
    U: UserRepository,
{
    place_repo: Arc<P>,
    user_repo: Arc<U>,
    id_generator: Arc<SnowflakeGenerator>,
    assets: AssetSettings,
}

impl<P, U> PlaceServiceImpl<P, U>
where
    P: PlaceRepository,
    U: UserRepository,
{
    /// Create a new PlaceServiceImpl
    pub fn new(
        place_repo: Arc<P>,
        user_repo: Arc<U>,
        id_generator: Arc<SnowflakeGenerator>,
        assets: AssetSettings,
    ) -> Self {
        Self {
            place_repo,
            user_repo,
            id_generator,
            assets,
        }
    }
}

#[async_trait]
impl<P, U> PlaceService for PlaceServiceImpl<P, U>
where
    P: PlaceRepository + 'static,
    U: UserRepository + 'static,
{
    async fn get_place(&self, place_id: i64) -> Result<PlaceDto, PlaceError> {
        let place = self
            .place_repo
            .find_by_id(place_id)
            .await
            .map_err(PlaceError::from_repo)?
            .ok_or(PlaceError::NotFound)?;

        Ok(PlaceDto::from(place))
    }

    async fn get_places_for_user(&self, user_id: i64) -> Result<Vec<PlaceDto>, PlaceError> {
        // A missing user is not the same as a user with no places.
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(PlaceError::from_repo)?
            .ok_or(PlaceError::UserNotFound)?;

        let places = self
            .place_repo
            .find_by_creator(user_id)
            .await
            .map_err(PlaceError::from_repo)?;

        Ok(places.into_iter().map(PlaceDto::from).collect())
    }

    async fn create_place(&self, request: CreatePlaceDto) -> Result<PlaceDto, PlaceError> {
        // The creator must exist before anything is written.
        self.user_repo
            .find_by_id(request.creator_id)
            .await
            .map_err(PlaceError::from_repo)?
            .ok_or(PlaceError::CreatorNotFound)?;

        let now = Utc::now();
        let place = Place {
            id: self.id_generator.generate(),
            title: request.title,
            description: request.description,
            address: request.address,
            image_url: self.assets.place_image_url.clone(),
            creator_id: request.creator_id,
            created_at: now,
            updated_at: now,
        };

        // The repository persists the place and the creator's link row in
        // one transaction scope; any failure inside it aborts both writes.
        let created = self
            .place_repo
            .create(&place)
            .await
            .map_err(PlaceError::from_repo)?;

        tracing::info!(place_id = %created.id, creator_id = %created.creator_id, "Place created");

        Ok(PlaceDto::from(created))
    }

    async fn update_place(
        &self,
        place_id: i64,
        update: UpdatePlaceDto,
    ) -> Result<PlaceDto, PlaceError> {
        let mut place = self
            .place_repo
            .find_by_id(place_id)
            .await
            .map_err(PlaceError::from_repo)?
            .ok_or(PlaceError::NotFound)?;

        place.title = update.title;
        place.description = update.description;
        place.updated_at = Utc::now();

        let updated = self
            .place_repo
            .update(&place)
            .await
            .map_err(PlaceError::from_repo)?;

        Ok(PlaceDto::from(updated))
    }

    async fn delete_place(&self, place_id: i64) -> Result<(), PlaceError> {
        // Fetch the place together with its creator so the detach targets
        // the right list.
        let with_creator = self
            .place_repo
            .find_with_creator(place_id)
            .await
            .map_err(PlaceError::from_repo)?
            .ok_or(PlaceError::NotFound)?;

        self.place_repo
            .delete(with_creator.place.id, with_creator.creator.id)
            .await
            .map_err(PlaceError::from_repo)?;

        tracing::info!(place_id = %place_id, "Place deleted");

        Ok(())
    }
}
