use std::sync::Arc;

use crate::domain::entities::token::IssuedToken;
use crate::errors::{DomainError, ValidationError};
use crate::services::token::TokenService;

use super::policy::IdentityClaimPolicy;

/// Credential Issuer: admits an identity claim, then signs it
pub struct CredentialIssuer {
    policy: Arc<dyn IdentityClaimPolicy>,
    tokens: Arc<TokenService>,
}

impl CredentialIssuer {
    pub fn new(policy: Arc<dyn IdentityClaimPolicy>, tokens: Arc<TokenService>) -> Self {
        Self { policy, tokens }
    }

    /// Issues a token for `email`
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The claim was admitted and signed
    /// * `Err(DomainError::Auth(PrincipalNotFound))` - No principal with this email
    /// * `Err(DomainError::Store)` - The principal lookup failed
    pub async fn issue(&self, email: &str) -> Result<IssuedToken, DomainError> {
        if email.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }

        let principal = self.policy.admit(email).await?;
        let issued = self.tokens.issue(&principal.email)?;

        tracing::info!(email = %principal.email, expires_at = %issued.expires_at, "Issued token");
        Ok(issued)
    }
}
