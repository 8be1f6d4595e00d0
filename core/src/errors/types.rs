//! Error types for authentication, credentials and input validation

use thiserror::Error;

use crate::domain::entities::principal::Role;

/// Authentication and authorization failures raised after the gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unauthorized access")]
    Unauthenticated,

    #[error("Principal not found: {email}")]
    PrincipalNotFound { email: String },

    #[error("forbidden access")]
    IdentityMismatch,

    #[error("Role {required} required")]
    InsufficientRole { required: Role },

    #[error("Role {role} cannot be self-assigned")]
    RoleNotSelfAssignable { role: Role },
}

/// Credential failures; all of them mean "invalid credential"
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token format")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Unknown role: {value}")]
    UnknownRole { value: String },
}
