//! Mock implementation of DocumentRepository for testing

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::document::{Document, FieldFilter};
use crate::errors::DomainError;

use super::trait_::DocumentRepository;

/// Mock collection that counts queries
#[derive(Default)]
pub struct MockDocumentRepository {
    documents: RwLock<Vec<Document>>,
    queries: AtomicUsize,
}

impl MockDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `find` calls served
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentRepository for MockDocumentRepository {
    async fn insert(&self, fields: Map<String, Value>) -> Result<Document, DomainError> {
        let document = Document::new(fields);
        self.documents.write().await.push(document.clone());
        Ok(document)
    }

    async fn find(&self, filter: FieldFilter) -> Result<Vec<Document>, DomainError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let documents = self.documents.read().await;
        Ok(documents.iter().filter(|d| d.matches(&filter)).cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|d| d.id != id);
        Ok(documents.len() != before)
    }
}
