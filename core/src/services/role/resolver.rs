use std::sync::Arc;

use crate::domain::entities::principal::Role;
use crate::errors::{AuthError, DomainError};
use crate::repositories::PrincipalRepository;

/// Answers "does this identity currently hold this role?"
///
/// The answer always reflects the store at lookup time; nothing is cached.
/// An identity without a principal holds no role.
pub struct RoleResolver {
    principals: Arc<dyn PrincipalRepository>,
}

impl RoleResolver {
    pub fn new(principals: Arc<dyn PrincipalRepository>) -> Self {
        Self { principals }
    }

    /// Current role of `email`, `None` when unset or unregistered
    pub async fn role_of(&self, email: &str) -> Result<Option<Role>, DomainError> {
        Ok(self
            .principals
            .find_by_email(email)
            .await?
            .and_then(|principal| principal.role))
    }

    pub async fn has_role(&self, email: &str, role: Role) -> Result<bool, DomainError> {
        Ok(self.role_of(email).await? == Some(role))
    }

    pub async fn is_admin(&self, email: &str) -> Result<bool, DomainError> {
        self.has_role(email, Role::Admin).await
    }

    pub async fn is_seller(&self, email: &str) -> Result<bool, DomainError> {
        self.has_role(email, Role::Seller).await
    }

    pub async fn is_buyer(&self, email: &str) -> Result<bool, DomainError> {
        self.has_role(email, Role::Buyer).await
    }

    /// Fails with `InsufficientRole` unless `email` holds `role`
    pub async fn require(&self, email: &str, role: Role) -> Result<(), DomainError> {
        if self.has_role(email, role).await? {
            Ok(())
        } else {
            tracing::warn!(email = %email, required = %role, "Role check failed");
            Err(AuthError::InsufficientRole { required: role }.into())
        }
    }
}
