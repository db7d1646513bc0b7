//! Application Layer
//!
//! Business logic services and data transfer objects.

pub mod dto;
pub mod services;
