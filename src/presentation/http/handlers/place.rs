//! Place Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreatePlaceRequest, UpdatePlaceRequest};
use crate::application::dto::response::{MessageEnvelope, PlaceEnvelope, PlaceResponse, PlacesEnvelope};
use crate::application::services::{
    CreatePlaceDto, PlaceError, PlaceService, PlaceServiceImpl, UpdatePlaceDto,
};
use crate::infrastructure::repositories::{PgPlaceRepository, PgUserRepository};
use crate::shared::error::AppError;
use crate::shared::snowflake;
use crate::shared::validation::{bad_request_error, validation_error};
use crate::startup::AppState;

/// Build a place service wired to the request's application state.
fn place_service(
    state: &AppState,
) -> PlaceServiceImpl<PgPlaceRepository, PgUserRepository> {
    let query_timeout = state.settings.database.query_timeout();
    let place_repo = Arc::new(PgPlaceRepository::new(state.db.clone(), query_timeout));
    let user_repo = Arc::new(PgUserRepository::new(state.db.clone(), query_timeout));

    PlaceServiceImpl::new(
        place_repo,
        user_repo,
        state.snowflake.clone(),
        state.settings.assets.clone(),
    )
}

/// Parse a path id into the internal representation.
fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    snowflake::from_string(raw).map_err(|_| AppError::BadRequest(format!("Invalid {} id", what)))
}

/// Map service failures onto boundary error kinds with their fixed messages.
fn map_place_error(err: PlaceError) -> AppError {
    match err {
        PlaceError::NotFound => {
            AppError::NotFound("Could not find a place for the provided place id".into())
        }
        PlaceError::CreatorNotFound => {
            AppError::NotFound("Could not find user for the provided id".into())
        }
        PlaceError::UserNotFound => {
            AppError::NotFound("Could not find places for the provided user id".into())
        }
        PlaceError::Transaction(msg) => AppError::Transaction(msg),
        PlaceError::Timeout => AppError::Timeout,
        PlaceError::Storage(msg) => AppError::Internal(msg),
    }
}

/// Get a single place by ID
pub async fn get_place(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<PlaceEnvelope>, AppError> {
    let place_id = parse_id(&pid, "place")?;

    let place = place_service(&state)
        .get_place(place_id)
        .await
        .map_err(map_place_error)?;

    Ok(Json(PlaceEnvelope {
        place: PlaceResponse::from(place),
    }))
}

/// Get all places created by a user
pub async fn get_places_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<PlacesEnvelope>, AppError> {
    let user_id = parse_id(&user_id, "user")?;

    let places = place_service(&state)
        .get_places_for_user(user_id)
        .await
        .map_err(map_place_error)?;

    Ok(Json(PlacesEnvelope {
        places: places.into_iter().map(PlaceResponse::from).collect(),
    }))
}

/// Create a new place
pub async fn create_place(
    State(state): State<AppState>,
    Json(body): Json<CreatePlaceRequest>,
) -> Result<(StatusCode, Json<PlaceEnvelope>), AppError> {
    // Validate request shape before any storage access
    body.validate().map_err(validation_error)?;

    let creator_id = parse_id(&body.creator, "user")?;

    let place = place_service(&state)
        .create_place(CreatePlaceDto {
            title: body.title,
            description: body.description,
            address: body.address,
            creator_id,
        })
        .await
        .map_err(map_place_error)?;

    Ok((
        StatusCode::CREATED,
        Json(PlaceEnvelope {
            place: PlaceResponse::from(place),
        }),
    ))
}

/// Update a place's title and description
pub async fn update_place(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    Json(body): Json<UpdatePlaceRequest>,
) -> Result<Json<PlaceEnvelope>, AppError> {
    // Update shape failures report as 400 rather than 422
    body.validate().map_err(bad_request_error)?;

    let place_id = parse_id(&pid, "place")?;

    let place = place_service(&state)
        .update_place(
            place_id,
            UpdatePlaceDto {
                title: body.title,
                description: body.description,
            },
        )
        .await
        .map_err(map_place_error)?;

    Ok(Json(PlaceEnvelope {
        place: PlaceResponse::from(place),
    }))
}

/// Delete a place
pub async fn delete_place(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<MessageEnvelope>, AppError> {
    let place_id = parse_id(&pid, "place")?;

    place_service(&state)
        .delete_place(place_id)
        .await
        .map_err(map_place_error)?;

    Ok(Json(MessageEnvelope {
        message: "Deleted the place",
    }))
}
