use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::principal::Principal;
use crate::errors::{AuthError, DomainError};
use crate::repositories::PrincipalRepository;

/// Decides whether an identity claim may be turned into a token
#[async_trait]
pub trait IdentityClaimPolicy: Send + Sync {
    /// Returns the principal the claim resolves to, or an error when the
    /// claim is not admitted.
    async fn admit(&self, email: &str) -> Result<Principal, DomainError>;
}

/// Identity-claim-only policy: any email on file is admitted.
///
/// No password or other secret is checked. Whoever can name a registered
/// email receives a token for it.
pub struct EmailLookupOnly {
    principals: Arc<dyn PrincipalRepository>,
}

impl EmailLookupOnly {
    pub fn new(principals: Arc<dyn PrincipalRepository>) -> Self {
        Self { principals }
    }
}

#[async_trait]
impl IdentityClaimPolicy for EmailLookupOnly {
    async fn admit(&self, email: &str) -> Result<Principal, DomainError> {
        self.principals
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AuthError::PrincipalNotFound {
                    email: email.to_string(),
                }
                .into()
            })
    }
}
