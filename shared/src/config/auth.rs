//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Token validity window used by the original service
pub const DEFAULT_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Longest accepted token lifetime (about ten years)
pub const MAX_TOKEN_EXPIRY_DAYS: i64 = 3650;

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Process-wide HS256 signing secret (`JWT_TOKEN_SECRET`)
    pub secret: String,

    /// Token lifetime in days
    #[serde(default = "default_expiry_days")]
    pub expiry_days: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_days: DEFAULT_TOKEN_EXPIRY_DAYS,
        }
    }

    /// Set token expiry in days
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.expiry_days = days;
        self
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"****")
            .field("expiry_days", &self.expiry_days)
            .finish()
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Emails promoted to admin when the store is bootstrapped
    #[serde(default)]
    pub admin_emails: Vec<String>,
}

/// Parse a comma separated `ADMIN_EMAILS` value
pub fn parse_admin_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_expiry_days() -> i64 {
    DEFAULT_TOKEN_EXPIRY_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default_expiry() {
        let config = JwtConfig::new("my-secret");
        assert_eq!(config.expiry_days, DEFAULT_TOKEN_EXPIRY_DAYS);
        assert!(config.expiry_days <= MAX_TOKEN_EXPIRY_DAYS);
    }

    #[test]
    fn test_jwt_config_debug_hides_secret() {
        let config = JwtConfig::new("my-secret").with_expiry_days(1);
        let printed = format!("{:?}", config);
        assert!(!printed.contains("my-secret"));
        assert!(printed.contains("expiry_days: 1"));
    }

    #[test]
    fn test_parse_admin_emails() {
        assert_eq!(
            parse_admin_emails(" a@x.com, ,b@x.com,"),
            vec!["a@x.com".to_string(), "b@x.com".to_string()]
        );
        assert!(parse_admin_emails("").is_empty());
    }
}
