//! # Old Book Center Core
//!
//! Core business logic for the Old Book Center backend.
//! This crate contains domain entities, repository interfaces, the credential
//! and role-authorization services, and the error types that every other
//! layer builds on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Claims, Document, FieldFilter, IssuedToken, Principal, Role, VerificationStatus,
};
pub use errors::{AuthError, DomainError, TokenError, ValidationError};
pub use repositories::{Collections, DocumentRepository, PrincipalRepository};
pub use services::{
    ensure_same_identity, CatalogService, CredentialIssuer, EmailLookupOnly,
    IdentityClaimPolicy, NewPrincipal, PrincipalService, Registration, RoleResolver,
    TokenService,
};
