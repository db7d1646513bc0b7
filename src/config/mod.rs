//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)

pub mod settings;

pub use settings::{
    AssetSettings, CorsSettings, DatabaseSettings, ServerSettings, Settings, SnowflakeSettings,
};
