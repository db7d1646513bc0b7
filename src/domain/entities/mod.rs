//! # Domain Entities
//!
//! Core domain entities representing the main business objects in the
//! directory. All entities map directly to their corresponding database
//! tables.
//!
//! ## Core Entities
//!
//! - **User**: An account that owns places
//! - **Place**: A directory entry owned by exactly one user
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod place;
mod user;

// Re-export User entity and related types
pub use user::{User, UserRepository};

// Re-export Place entity and related types
pub use place::{Place, PlaceRepository, PlaceWithCreator};

#[cfg(test)]
pub use place::MockPlaceRepository;
#[cfg(test)]
pub use user::MockUserRepository;
