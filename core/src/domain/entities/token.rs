//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for JWT payload.
///
/// A token asserts exactly one identity (the principal's email) plus the
/// standard issuance and expiry timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity claim
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `email` issued at `issued_at`, valid for `validity`.
    ///
    /// Returns `None` when the expiry falls outside the representable range.
    pub fn new(
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(validity)?;

        Some(Self {
            email: email.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_default()
    }
}

/// A freshly signed token handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Compact JWT
    pub token: String,

    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}
