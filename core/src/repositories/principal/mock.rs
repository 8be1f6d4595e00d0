//! Mock implementation of PrincipalRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::principal::{Principal, Role, VerificationStatus};
use crate::errors::DomainError;

use super::trait_::PrincipalRepository;

/// Mock principal repository for testing
pub struct MockPrincipalRepository {
    principals: Arc<RwLock<HashMap<Uuid, Principal>>>,
    lookups: AtomicUsize,
    failing: AtomicBool,
}

impl MockPrincipalRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            principals: Arc::new(RwLock::new(HashMap::new())),
            lookups: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Insert a principal with an optional role
    pub async fn seed(&self, email: &str, role: Option<Role>) -> Principal {
        let mut principal = Principal::new(email);
        principal.role = role;
        self.principals
            .write()
            .await
            .insert(principal.id, principal.clone());
        principal
    }

    /// Make every following call fail as a store error
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Number of calls that reached the repository
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn touch(&self) -> Result<(), DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::store("connection reset"));
        }
        Ok(())
    }
}

impl Default for MockPrincipalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrincipalRepository for MockPrincipalRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, DomainError> {
        self.touch()?;
        let principals = self.principals.read().await;
        Ok(principals.values().find(|p| p.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, DomainError> {
        self.touch()?;
        Ok(self.principals.read().await.get(&id).cloned())
    }

    async fn create(&self, principal: Principal) -> Result<Principal, DomainError> {
        self.touch()?;
        let mut principals = self.principals.write().await;
        if principals.values().any(|p| p.email == principal.email) {
            return Err(DomainError::AlreadyExists {
                resource: "Principal".to_string(),
            });
        }
        principals.insert(principal.id, principal.clone());
        Ok(principal)
    }

    async fn list(&self, role: Option<Role>) -> Result<Vec<Principal>, DomainError> {
        self.touch()?;
        let principals = self.principals.read().await;
        Ok(principals
            .values()
            .filter(|p| role.map_or(true, |r| p.has_role(r)))
            .cloned()
            .collect())
    }

    async fn set_role(&self, id: Uuid, role: Role) -> Result<Option<Principal>, DomainError> {
        self.touch()?;
        let mut principals = self.principals.write().await;
        Ok(principals.get_mut(&id).map(|p| {
            p.set_role(role);
            p.clone()
        }))
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
    ) -> Result<Option<Principal>, DomainError> {
        self.touch()?;
        let mut principals = self.principals.write().await;
        Ok(principals.get_mut(&id).map(|p| {
            p.status = status;
            p.clone()
        }))
    }

    async fn upsert_role_by_email(
        &self,
        email: &str,
        role: Role,
    ) -> Result<Principal, DomainError> {
        self.touch()?;
        let mut principals = self.principals.write().await;
        if let Some(existing) = principals.values_mut().find(|p| p.email == email) {
            existing.set_role(role);
            return Ok(existing.clone());
        }
        let mut principal = Principal::new(email);
        principal.set_role(role);
        principals.insert(principal.id, principal.clone());
        Ok(principal)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.touch()?;
        Ok(self.principals.write().await.remove(&id).is_some())
    }
}
