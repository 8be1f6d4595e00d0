//! Document store connection settings

use serde::{Deserialize, Serialize};

/// Default cluster host of the hosted document store
pub const DEFAULT_CLUSTER: &str = "cluster0.s9x13go.mongodb.net";

/// Default database holding the bookstore collections
pub const DEFAULT_DATABASE: &str = "oldBookCenter";

/// Document store configuration assembled from `DB_USER` / `DB_PASSWORD`
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Store user name
    pub user: String,

    /// Store password, never printed
    pub password: String,

    /// Cluster host name
    pub cluster: String,

    /// Database name
    pub database: String,

    /// JSON array of category documents loaded at startup (`CATEGORIES_FILE`)
    #[serde(default)]
    pub categories_file: Option<String>,
}

impl DatabaseConfig {
    /// Create a configuration against the default cluster and database
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            cluster: DEFAULT_CLUSTER.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            categories_file: None,
        }
    }

    /// Connection string safe for logs
    pub fn redacted_uri(&self) -> String {
        format!(
            "mongodb+srv://{}:****@{}/?retryWrites=true&w=majority",
            self.user, self.cluster
        )
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"****")
            .field("cluster", &self.cluster)
            .field("database", &self.database)
            .field("categories_file", &self.categories_file)
            .finish()
    }
}
