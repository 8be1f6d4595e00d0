//! Catalog: categories, products and orders.
//!
//! Uniform validate-forward-return operations over the resource collections.
//! Listings scoped to "my own records" pass through the identity guard first.

mod service;


pub use service::{CatalogService, OWNER_FIELD, CATEGORY_FIELD};
