//! Business services containing domain logic and use cases.

pub mod catalog;
pub mod credential;
pub mod identity_guard;
pub mod principal;
pub mod role;
pub mod token;

// Re-export commonly used types
pub use catalog::CatalogService;
pub use credential::{CredentialIssuer, EmailLookupOnly, IdentityClaimPolicy};
pub use identity_guard::ensure_same_identity;
pub use principal::{NewPrincipal, PrincipalService, Registration};
pub use role::RoleResolver;
pub use token::TokenService;
