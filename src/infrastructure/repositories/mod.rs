//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! Each repository handles data access for one entity type. Every query
//! runs under the bounded timeout from `database::with_query_timeout`.

pub mod place_repository;
pub mod user_repository;

pub use place_repository::PgPlaceRepository;
pub use user_repository::PgUserRepository;
