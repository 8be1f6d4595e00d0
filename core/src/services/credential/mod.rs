//! Credential issuance
//!
//! Turning an identity claim into a signed token is split in two steps:
//! an [`IdentityClaimPolicy`] decides whether the claim is admitted, then the
//! [`CredentialIssuer`] signs it. Only the policy would change if issuance
//! ever required a secret; the gate is untouched either way.

mod issuer;
mod policy;


pub use issuer::CredentialIssuer;
pub use policy::{EmailLookupOnly, IdentityClaimPolicy};
