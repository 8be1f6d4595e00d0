//! Generic resource collection

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use obc_core::domain::entities::document::{Document, FieldFilter};
use obc_core::errors::DomainError;
use obc_core::repositories::DocumentRepository;

/// In-memory collection of schemaless documents, kept in insertion order
#[derive(Debug)]
pub struct InMemoryCollection {
    name: &'static str,
    documents: RwLock<Vec<Document>>,
}

impl InMemoryCollection {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            documents: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryCollection {
    async fn insert(&self, fields: Map<String, Value>) -> Result<Document, DomainError> {
        let document = Document::new(fields);
        self.documents.write().await.push(document.clone());
        tracing::debug!(collection = self.name, id = %document.id, "Inserted document");
        Ok(document)
    }

    async fn find(&self, filter: FieldFilter) -> Result<Vec<Document>, DomainError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|document| document.matches(&filter))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|document| document.id != id);
        let deleted = documents.len() != before;
        tracing::debug!(collection = self.name, id = %id, deleted, "Delete document");
        Ok(deleted)
    }
}
