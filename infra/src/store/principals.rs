//! `users` collection

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use obc_core::domain::entities::principal::{Principal, Role, VerificationStatus};
use obc_core::errors::DomainError;
use obc_core::repositories::PrincipalRepository;

#[derive(Default, Debug)]
struct Table {
    rows: HashMap<Uuid, Principal>,
    // Unique index on `email`
    by_email: HashMap<String, Uuid>,
}

impl Table {
    fn by_email_mut(&mut self, email: &str) -> Option<&mut Principal> {
        let id = *self.by_email.get(email)?;
        self.rows.get_mut(&id)
    }
}

/// In-memory principal repository with a unique email index
///
/// Every mutation holds the write lock for the whole read-modify-write, so
/// two concurrent updates of the same principal serialize and neither is lost.
#[derive(Default, Debug)]
pub struct InMemoryPrincipalRepository {
    table: RwLock<Table>,
}

impl InMemoryPrincipalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl PrincipalRepository for InMemoryPrincipalRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .by_email
            .get(email)
            .and_then(|id| table.rows.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, DomainError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, principal: Principal) -> Result<Principal, DomainError> {
        let mut table = self.table.write().await;
        if table.by_email.contains_key(&principal.email) {
            return Err(DomainError::AlreadyExists {
                resource: format!("Principal {}", principal.email),
            });
        }

        table.by_email.insert(principal.email.clone(), principal.id);
        table.rows.insert(principal.id, principal.clone());
        tracing::info!(id = %principal.id, "Principal created");
        Ok(principal)
    }

    async fn list(&self, role: Option<Role>) -> Result<Vec<Principal>, DomainError> {
        let table = self.table.read().await;
        let mut principals: Vec<Principal> = table
            .rows
            .values()
            .filter(|p| role.map_or(true, |r| p.has_role(r)))
            .cloned()
            .collect();
        principals.sort_by_key(|p| p.created_at);
        Ok(principals)
    }

    async fn set_role(&self, id: Uuid, role: Role) -> Result<Option<Principal>, DomainError> {
        let mut table = self.table.write().await;
        let Some(principal) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        principal.set_role(role);
        tracing::info!(id = %id, role = %role, "Role updated");
        Ok(Some(principal.clone()))
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
    ) -> Result<Option<Principal>, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|principal| {
            match status {
                VerificationStatus::Verified => principal.verify(),
                VerificationStatus::Unverified => principal.status = status,
            }
            principal.clone()
        }))
    }

    async fn upsert_role_by_email(
        &self,
        email: &str,
        role: Role,
    ) -> Result<Principal, DomainError> {
        let mut table = self.table.write().await;
        if let Some(existing) = table.by_email_mut(email) {
            existing.set_role(role);
            return Ok(existing.clone());
        }

        let mut principal = Principal::new(email);
        principal.set_role(role);
        table.by_email.insert(principal.email.clone(), principal.id);
        table.rows.insert(principal.id, principal.clone());
        Ok(principal)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        match table.rows.remove(&id) {
            Some(principal) => {
                table.by_email.remove(&principal.email);
                tracing::info!(id = %id, "Principal deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
