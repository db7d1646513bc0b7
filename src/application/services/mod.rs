//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **PlaceService**: place reads plus the two compound cross-entity
//!   writes (create-and-attach, delete-and-detach)
//! - **UserService**: signup, login, and user listing

pub mod place_service;
pub mod user_service;

// Re-export place service types
pub use place_service::{
    CreatePlaceDto, PlaceDto, PlaceError, PlaceService, PlaceServiceImpl, UpdatePlaceDto,
};

// Re-export user service types
pub use user_service::{SignupDto, UserDto, UserError, UserService, UserServiceImpl};
