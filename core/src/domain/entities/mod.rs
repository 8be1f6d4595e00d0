//! Domain entities representing core business objects.

pub mod document;
pub mod principal;
pub mod token;

// Re-export commonly used types
pub use document::{Document, FieldFilter};
pub use principal::{Principal, Role, VerificationStatus};
pub use token::{Claims, IssuedToken};
