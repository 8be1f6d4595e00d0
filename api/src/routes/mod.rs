//! Route handlers
//!
//! - `health` - liveness text
//! - `jwt` - credential issuance
//! - `users` - registration, role predicates and principal administration
//! - `catalog` - categories, products and orders

pub mod catalog;
pub mod health;
pub mod jwt;
pub mod users;

use obc_core::errors::ValidationError;
use uuid::Uuid;

/// Parses a document id taken from the path
pub(crate) fn parse_document_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
    })
}
