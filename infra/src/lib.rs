//! # Infrastructure Layer
//!
//! Concrete implementations of the repository traits declared in
//! `obc_core`. The bookstore database is modelled as a document store with
//! four collections (`users`, `categories`, `products`, `orders`); the
//! implementation here keeps them in process memory behind async locks.
//! Categories have no write endpoint and are loaded from `CATEGORIES_FILE`
//! when the store opens.

pub mod seed;
pub mod store;

pub use store::{DocumentStore, InMemoryCollection, InMemoryPrincipalRepository};

use obc_shared::config::DatabaseConfig;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store bootstrap error
    #[error("Store error: {0}")]
    Store(String),

    /// Seed file could not be read or parsed
    #[error("Seed error in {path}: {message}")]
    Seed { path: String, message: String },
}

/// Open the document store described by `config`
pub async fn initialize(config: &DatabaseConfig) -> Result<DocumentStore, InfrastructureError> {
    if config.database.is_empty() {
        return Err(InfrastructureError::Config(
            "database name must not be empty".to_string(),
        ));
    }

    tracing::info!(uri = %config.redacted_uri(), database = %config.database, "Opening document store");
    let store = DocumentStore::new(&config.database);

    if let Some(path) = &config.categories_file {
        let documents = seed::load_documents(path).await?;
        let inserted = store.seed_categories(documents).await?;
        tracing::info!(path = %path, inserted, "Loaded categories");
    }

    tracing::info!("Document store ready");

    Ok(store)
}
