pub mod auth;
pub mod cors;

pub use auth::{AuthContext, CredentialVerifier, JwtAuth};
pub use cors::create_cors;
