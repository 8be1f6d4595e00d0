//! Error codes shared by every API response

/// Common error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFLICT: &str = "CONFLICT";
    pub const PRINCIPAL_NOT_FOUND: &str = "PRINCIPAL_NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const STORE_ERROR: &str = "STORE_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
