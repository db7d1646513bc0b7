//! Request DTOs
//!
//! Data structures for API request bodies. Shape checks are pure: they run
//! before any storage access and signal a generic validation failure with
//! no field-level detail on the wire.

use serde::Deserialize;
use validator::Validate;

/// Create place request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    #[validate(length(min = 5, message = "Description must be at least 5 characters"))]
    pub description: String,

    #[validate(length(min = 1, message = "Address must not be empty"))]
    pub address: String,

    /// ID of the owning user, as the normalized string form
    pub creator: String,
}

/// Update place request (title and description only)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    #[validate(length(min = 5, message = "Description must be at least 5 characters"))]
    pub description: String,
}

/// Signup request
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 5, message = "Password must be at least 5 characters"))]
    pub password: String,
}

/// Login request. Carries no shape validation; credentials are checked
/// against the store only.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
