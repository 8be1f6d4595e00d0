//! Identity-Match Guard
//!
//! A caller may only request records scoped to the identity their token
//! asserts. Handlers call [`ensure_same_identity`] before touching the store
//! and return early on `Err`.

use crate::errors::AuthError;

/// Succeeds only when the requested identity is exactly the authenticated one
pub fn ensure_same_identity(requested: &str, authenticated: &str) -> Result<(), AuthError> {
    if requested.is_empty() || requested != authenticated {
        tracing::warn!(
            requested = %requested,
            authenticated = %authenticated,
            "Identity mismatch"
        );
        return Err(AuthError::IdentityMismatch);
    }
    Ok(())
}
