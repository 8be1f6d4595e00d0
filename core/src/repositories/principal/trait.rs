//! Principal repository trait: the `users` collection.
//!
//! The store is the single source of truth for roles and verification
//! status. Every mutation targets exactly one principal and must be applied
//! atomically at the document level.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::principal::{Principal, Role, VerificationStatus};
use crate::errors::DomainError;

/// Repository trait for Principal persistence operations
///
/// # Example
/// ```no_run
/// # use obc_core::repositories::PrincipalRepository;
/// # async fn example(repo: &dyn PrincipalRepository) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_email("reader@example.com").await? {
///     Some(principal) => println!("role: {:?}", principal.role),
///     None => println!("not registered"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait PrincipalRepository: Send + Sync {
    /// Find a principal by exact (case-sensitive) email
    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, DomainError>;

    /// Find a principal by document id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, DomainError>;

    /// Insert a new principal
    ///
    /// # Returns
    /// * `Ok(Principal)` - The stored principal
    /// * `Err(DomainError::AlreadyExists)` - The email is already registered
    async fn create(&self, principal: Principal) -> Result<Principal, DomainError>;

    /// List principals, optionally restricted to one role
    async fn list(&self, role: Option<Role>) -> Result<Vec<Principal>, DomainError>;

    /// Set the role of one principal
    ///
    /// # Returns
    /// * `Ok(Some(Principal))` - The updated principal
    /// * `Ok(None)` - No principal with this id
    async fn set_role(&self, id: Uuid, role: Role) -> Result<Option<Principal>, DomainError>;

    /// Set the verification status of one principal
    async fn set_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
    ) -> Result<Option<Principal>, DomainError>;

    /// Grant a role by email, creating the principal when absent
    async fn upsert_role_by_email(&self, email: &str, role: Role)
        -> Result<Principal, DomainError>;

    /// Delete a principal
    ///
    /// # Returns
    /// * `Ok(true)` - Principal was deleted
    /// * `Ok(false)` - Principal not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
