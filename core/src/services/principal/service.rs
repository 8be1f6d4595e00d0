use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::principal::{Principal, Role, VerificationStatus};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::PrincipalRepository;
use crate::services::role::RoleResolver;

/// Self-registration payload
#[derive(Debug, Clone, Default)]
pub struct NewPrincipal {
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    /// Self-selected role; only buyer and seller are accepted
    pub role: Option<Role>,
}

/// Outcome of a registration
#[derive(Debug, Clone)]
pub struct Registration {
    pub principal: Principal,
    /// `false` when the email was already registered
    pub created: bool,
}

/// Service for principal lifecycle operations.
///
/// Administrative operations take the acting identity (as decoded by the
/// gate) and check it holds the admin role before touching the target.
pub struct PrincipalService {
    principals: Arc<dyn PrincipalRepository>,
    roles: Arc<RoleResolver>,
}

impl PrincipalService {
    pub fn new(principals: Arc<dyn PrincipalRepository>, roles: Arc<RoleResolver>) -> Self {
        Self { principals, roles }
    }

    /// Registers a principal on first sign-in.
    ///
    /// Registration is idempotent: an email already on file is returned
    /// unchanged.
    pub async fn register(&self, request: NewPrincipal) -> Result<Registration, DomainError> {
        if request.email.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        if let Some(role) = request.role {
            if !role.is_self_assignable() {
                return Err(AuthError::RoleNotSelfAssignable { role }.into());
            }
        }

        if let Some(existing) = self.principals.find_by_email(&request.email).await? {
            return Ok(Registration {
                principal: existing,
                created: false,
            });
        }

        let email = request.email.clone();
        let mut principal =
            Principal::new(request.email).with_profile(request.name, request.photo_url);
        principal.role = request.role;

        match self.principals.create(principal).await {
            Ok(principal) => {
                tracing::info!(email = %principal.email, role = ?principal.role, "Registered principal");
                Ok(Registration {
                    principal,
                    created: true,
                })
            }
            // Lost a race against a concurrent registration of the same email
            Err(DomainError::AlreadyExists { .. }) => {
                let principal = self
                    .principals
                    .find_by_email(&email)
                    .await?
                    .ok_or_else(|| DomainError::not_found("Principal"))?;
                Ok(Registration {
                    principal,
                    created: false,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Lists principals, optionally by role. Admin only.
    pub async fn list(
        &self,
        actor: &str,
        role: Option<Role>,
    ) -> Result<Vec<Principal>, DomainError> {
        self.roles.require(actor, Role::Admin).await?;
        self.principals.list(role).await
    }

    /// Deletes a principal. Admin only. Tokens already issued to it stay
    /// valid until they expire.
    pub async fn delete(&self, actor: &str, id: Uuid) -> Result<(), DomainError> {
        self.roles.require(actor, Role::Admin).await?;
        if !self.principals.delete(id).await? {
            return Err(DomainError::not_found("Principal"));
        }
        tracing::info!(actor = %actor, principal = %id, "Deleted principal");
        Ok(())
    }

    /// Sets the role of a principal. Admin only, idempotent.
    pub async fn set_role(
        &self,
        actor: &str,
        id: Uuid,
        role: Role,
    ) -> Result<Principal, DomainError> {
        self.roles.require(actor, Role::Admin).await?;
        let principal = self
            .principals
            .set_role(id, role)
            .await?
            .ok_or_else(|| DomainError::not_found("Principal"))?;
        tracing::info!(actor = %actor, email = %principal.email, role = %role, "Role updated");
        Ok(principal)
    }

    /// Marks a principal verified. Admin only, idempotent.
    pub async fn verify(&self, actor: &str, id: Uuid) -> Result<Principal, DomainError> {
        self.roles.require(actor, Role::Admin).await?;
        let principal = self
            .principals
            .set_status(id, VerificationStatus::Verified)
            .await?
            .ok_or_else(|| DomainError::not_found("Principal"))?;
        tracing::info!(actor = %actor, email = %principal.email, "Principal verified");
        Ok(principal)
    }

    /// Grants admin to each configured email, registering it when absent
    pub async fn seed_admins(&self, emails: &[String]) -> Result<usize, DomainError> {
        for email in emails {
            self.principals.upsert_role_by_email(email, Role::Admin).await?;
            tracing::info!(email = %email, "Seeded administrator");
        }
        Ok(emails.len())
    }
}
