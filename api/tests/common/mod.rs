//! Shared helpers for the API integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use obc_api::AppState;
use obc_core::domain::entities::document::{Document, FieldFilter};
use obc_core::domain::entities::principal::{Principal, Role, VerificationStatus};
use obc_core::errors::DomainError;
use obc_core::repositories::{Collections, DocumentRepository, PrincipalRepository};
use obc_infra::DocumentStore;
use obc_shared::JwtConfig;

pub const TEST_SECRET: &str = "test-secret-for-integration";

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

/// Fresh in-memory store and the state wired over it
pub fn test_state() -> (DocumentStore, web::Data<AppState>) {
    let store = DocumentStore::new("oldBookCenter");
    let state = web::Data::new(AppState::new(&store.collections(), &jwt_config()));
    (store, state)
}

/// State whose every collection fails like an unreachable store
pub fn failing_state() -> web::Data<AppState> {
    let collections = Collections {
        principals: Arc::new(FailingStore),
        categories: Arc::new(FailingStore),
        products: Arc::new(FailingStore),
        orders: Arc::new(FailingStore),
    };
    web::Data::new(AppState::new(&collections, &jwt_config()))
}

/// `Authorization` header value for `email`
pub fn bearer(state: &AppState, email: &str) -> String {
    let issued = state.tokens.issue(email).unwrap();
    format!("Bearer {}", issued.token)
}

pub async fn register(store: &DocumentStore, email: &str, role: Option<Role>) -> Principal {
    let mut principal = Principal::new(email);
    principal.role = role;
    store.principals().create(principal).await.unwrap()
}

pub fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

pub struct FailingStore;

fn unreachable_store() -> DomainError {
    DomainError::store("connection reset")
}

#[async_trait]
impl PrincipalRepository for FailingStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<Principal>, DomainError> {
        Err(unreachable_store())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Principal>, DomainError> {
        Err(unreachable_store())
    }

    async fn create(&self, _principal: Principal) -> Result<Principal, DomainError> {
        Err(unreachable_store())
    }

    async fn list(&self, _role: Option<Role>) -> Result<Vec<Principal>, DomainError> {
        Err(unreachable_store())
    }

    async fn set_role(&self, _id: Uuid, _role: Role) -> Result<Option<Principal>, DomainError> {
        Err(unreachable_store())
    }

    async fn set_status(
        &self,
        _id: Uuid,
        _status: VerificationStatus,
    ) -> Result<Option<Principal>, DomainError> {
        Err(unreachable_store())
    }

    async fn upsert_role_by_email(
        &self,
        _email: &str,
        _role: Role,
    ) -> Result<Principal, DomainError> {
        Err(unreachable_store())
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, DomainError> {
        Err(unreachable_store())
    }
}

#[async_trait]
impl DocumentRepository for FailingStore {
    async fn insert(&self, _fields: Map<String, Value>) -> Result<Document, DomainError> {
        Err(unreachable_store())
    }

    async fn find(&self, _filter: FieldFilter) -> Result<Vec<Document>, DomainError> {
        Err(unreachable_store())
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, DomainError> {
        Err(unreachable_store())
    }
}
