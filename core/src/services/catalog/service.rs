use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::document::{Document, FieldFilter};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{Collections, DocumentRepository};
use crate::services::identity_guard::ensure_same_identity;

/// Field naming the owning identity of products and orders
pub const OWNER_FIELD: &str = "email";

/// Field naming the category of a product
pub const CATEGORY_FIELD: &str = "categories_id";

pub struct CatalogService {
    categories: Arc<dyn DocumentRepository>,
    products: Arc<dyn DocumentRepository>,
    orders: Arc<dyn DocumentRepository>,
}

impl CatalogService {
    pub fn new(collections: &Collections) -> Self {
        Self {
            categories: collections.categories.clone(),
            products: collections.products.clone(),
            orders: collections.orders.clone(),
        }
    }

    pub async fn list_categories(&self) -> Result<Vec<Document>, DomainError> {
        self.categories.find(FieldFilter::All).await
    }

    pub async fn products_by_category(&self, category_id: i64) -> Result<Vec<Document>, DomainError> {
        self.products
            .find(FieldFilter::equals(CATEGORY_FIELD, category_id))
            .await
    }

    /// Products listed by `requested`; denied unless it is the caller
    pub async fn products_by_owner(
        &self,
        requested: &str,
        authenticated: &str,
    ) -> Result<Vec<Document>, DomainError> {
        ensure_same_identity(requested, authenticated)?;
        self.products
            .find(FieldFilter::equals(OWNER_FIELD, requested))
            .await
    }

    /// Adds a product owned by the caller.
    ///
    /// A missing owner is stamped with the caller's identity; naming someone
    /// else is denied.
    pub async fn add_product(
        &self,
        authenticated: &str,
        mut fields: Map<String, Value>,
    ) -> Result<Document, DomainError> {
        match fields.get(OWNER_FIELD) {
            None | Some(Value::Null) => {
                fields.insert(OWNER_FIELD.to_string(), Value::from(authenticated));
            }
            Some(Value::String(owner)) if owner == authenticated => {}
            Some(_) => return Err(AuthError::IdentityMismatch.into()),
        }
        let product = self.products.insert(fields).await?;
        tracing::info!(owner = %authenticated, product = %product.id, "Product added");
        Ok(product)
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<bool, DomainError> {
        self.products.delete(id).await
    }

    pub async fn add_order(&self, fields: Map<String, Value>) -> Result<Document, DomainError> {
        let order = self.orders.insert(fields).await?;
        tracing::info!(order = %order.id, "Order placed");
        Ok(order)
    }

    /// Orders placed by `requested`; denied unless it is the caller
    pub async fn orders_by_owner(
        &self,
        requested: &str,
        authenticated: &str,
    ) -> Result<Vec<Document>, DomainError> {
        ensure_same_identity(requested, authenticated)?;
        self.orders
            .find(FieldFilter::equals(OWNER_FIELD, requested))
            .await
    }
}
