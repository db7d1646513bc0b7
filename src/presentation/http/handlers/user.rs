//! User Handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::application::dto::request::{LoginRequest, SignupRequest};
use crate::application::dto::response::{LoginResponse, UserEnvelope, UserResponse, UsersEnvelope};
use crate::application::services::{SignupDto, UserError, UserService, UserServiceImpl};
use crate::infrastructure::repositories::PgUserRepository;
use crate::shared::error::AppError;
use crate::shared::validation::{normalize_email, validation_error};
use crate::startup::AppState;

/// Build a user service wired to the request's application state.
fn user_service(state: &AppState) -> UserServiceImpl<PgUserRepository> {
    let user_repo = Arc::new(PgUserRepository::new(
        state.db.clone(),
        state.settings.database.query_timeout(),
    ));

    UserServiceImpl::new(
        user_repo,
        state.snowflake.clone(),
        state.settings.assets.clone(),
    )
}

/// Map service failures onto boundary error kinds with their fixed messages.
fn map_user_error(err: UserError) -> AppError {
    match err {
        UserError::EmailExists => AppError::Conflict(
            "There already exists a user with the entered email. Try logging in instead".into(),
        ),
        UserError::InvalidCredentials => {
            AppError::Unauthorized("Invalid credentials: Could not log you in".into())
        }
        UserError::Timeout => AppError::Timeout,
        UserError::Storage(msg) | UserError::Internal(msg) => AppError::Internal(msg),
    }
}

/// List all users (password excluded)
pub async fn get_users(State(state): State<AppState>) -> Result<Json<UsersEnvelope>, AppError> {
    let users = user_service(&state)
        .list_users()
        .await
        .map_err(map_user_error)?;

    Ok(Json(UsersEnvelope {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// Register a new user
pub async fn signup(
    State(state): State<AppState>,
    Json(mut body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserEnvelope>), AppError> {
    // Normalize before validation so padded-but-valid emails pass, then
    // validate the shape before any storage access.
    body.email = normalize_email(&body.email);
    body.validate().map_err(validation_error)?;

    let user = user_service(&state)
        .signup(SignupDto {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await
        .map_err(map_user_error)?;

    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            user: UserResponse::from(user),
        }),
    ))
}

/// Log a user in
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = user_service(&state)
        .login(&body.email, &body.password)
        .await
        .map_err(map_user_error)?;

    Ok(Json(LoginResponse {
        message: "Logged In",
        user: UserResponse::from(user),
    }))
}
