//! In-memory document store
//!
//! Each collection owns its own `tokio::sync::RwLock`, so a mutation of one
//! document is an atomic read-modify-write and readers of other collections
//! are never blocked.

mod collection;
mod principals;

pub use collection::InMemoryCollection;
pub use principals::InMemoryPrincipalRepository;

use std::sync::Arc;

use serde_json::{Map, Value};

use obc_core::repositories::{Collections, DocumentRepository};

use crate::InfrastructureError;

/// Collection holding book categories
pub const CATEGORIES: &str = "categories";
/// Collection holding listed books
pub const PRODUCTS: &str = "products";
/// Collection holding placed orders
pub const ORDERS: &str = "orders";

/// The bookstore database: one handle per collection
#[derive(Clone, Debug)]
pub struct DocumentStore {
    database: String,
    principals: Arc<InMemoryPrincipalRepository>,
    categories: Arc<InMemoryCollection>,
    products: Arc<InMemoryCollection>,
    orders: Arc<InMemoryCollection>,
}

impl DocumentStore {
    /// Create an empty database
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            principals: Arc::new(InMemoryPrincipalRepository::new()),
            categories: Arc::new(InMemoryCollection::new(CATEGORIES)),
            products: Arc::new(InMemoryCollection::new(PRODUCTS)),
            orders: Arc::new(InMemoryCollection::new(ORDERS)),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn principals(&self) -> Arc<InMemoryPrincipalRepository> {
        self.principals.clone()
    }

    pub fn categories(&self) -> Arc<InMemoryCollection> {
        self.categories.clone()
    }

    pub fn products(&self) -> Arc<InMemoryCollection> {
        self.products.clone()
    }

    pub fn orders(&self) -> Arc<InMemoryCollection> {
        self.orders.clone()
    }

    /// Inserts `documents` into the categories collection, returning how many
    pub async fn seed_categories(
        &self,
        documents: Vec<Map<String, Value>>,
    ) -> Result<usize, InfrastructureError> {
        let mut inserted = 0;
        for fields in documents {
            self.categories
                .insert(fields)
                .await
                .map_err(|e| InfrastructureError::Store(e.to_string()))?;
            inserted += 1;
        }

        Ok(inserted)
    }

    /// Trait-object handles for the service layer
    pub fn collections(&self) -> Collections {
        Collections {
            principals: self.principals.clone(),
            categories: self.categories.clone(),
            products: self.products.clone(),
            orders: self.orders.clone(),
        }
    }
}
