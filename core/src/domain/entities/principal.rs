//! Principal entity: a registered identity of the bookstore.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ValidationError;

/// Role assigned to a principal.
///
/// Roles arrive as free-form strings from clients and from documents written
/// by older revisions (`"admin"`, `"Seller"`, `"Buyer"`). Every string is
/// canonicalized through [`Role::canonicalize`], so comparisons are always
/// enum equality and stored documents always carry the lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A customer purchasing second-hand books
    Buyer,
    /// A customer listing books for sale
    Seller,
    /// Store administrator
    Admin,
}

impl Role {
    /// All roles, in privilege order
    pub const ALL: [Role; 3] = [Role::Buyer, Role::Seller, Role::Admin];

    /// Canonicalize a role identifier: trimmed, case-insensitive.
    pub fn canonicalize(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "buyer" => Ok(Role::Buyer),
            "seller" => Ok(Role::Seller),
            "admin" => Ok(Role::Admin),
            _ => Err(ValidationError::UnknownRole {
                value: raw.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }

    /// Whether a registrant may pick this role for themselves
    pub fn is_self_assignable(&self) -> bool {
        !matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::canonicalize(s)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Role::canonicalize(&raw).map_err(de::Error::custom)
    }
}

/// Verification state of a principal. The only transition is
/// `Unverified -> Verified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Unverified,
    Verified,
}

/// Principal document stored in the `users` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Document identifier
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Identity key, unique and compared case-sensitively
    pub email: String,

    /// Display name supplied at registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Avatar supplied at registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// Assigned role, `None` until chosen or granted
    #[serde(default)]
    pub role: Option<Role>,

    /// Verification status
    #[serde(default)]
    pub status: VerificationStatus,

    /// Timestamp when the principal registered
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last mutation
    pub updated_at: DateTime<Utc>,
}

impl Principal {
    /// Creates a new principal with no role and unverified status
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: None,
            photo_url: None,
            role: None,
            status: VerificationStatus::Unverified,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches profile fields
    pub fn with_profile(mut self, name: Option<String>, photo_url: Option<String>) -> Self {
        self.name = name;
        self.photo_url = photo_url;
        self
    }

    /// Sets the role
    pub fn set_role(&mut self, role: Role) {
        self.role = Some(role);
        self.updated_at = Utc::now();
    }

    /// Marks the principal as verified. Calling it again is a no-op on state.
    pub fn verify(&mut self) {
        self.status = VerificationStatus::Verified;
        self.updated_at = Utc::now();
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }
}
