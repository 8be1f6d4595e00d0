//! Resource collection trait for categories, products and orders.

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::entities::document::{Document, FieldFilter};
use crate::errors::DomainError;

/// Plain document collection: insert, filtered find, delete by id
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Store a new document built from client fields
    async fn insert(&self, fields: Map<String, Value>) -> Result<Document, DomainError>;

    /// Documents matching `filter`, in insertion order
    async fn find(&self, filter: FieldFilter) -> Result<Vec<Document>, DomainError>;

    /// Delete by id; `Ok(false)` when nothing matched
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
