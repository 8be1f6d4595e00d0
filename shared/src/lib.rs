//! Shared configuration and wire types for the Old Book Center server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - The unified response envelope and error codes

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, ServerConfig,
};
pub use errors::error_codes;
pub use types::{ApiResponse, ErrorBody};
