//! Principal DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use obc_core::domain::entities::principal::Role;
use obc_core::errors::ValidationError;
use obc_core::services::NewPrincipal;

/// Self-registration request for `POST /users`
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, alias = "photoURL", alias = "photoUrl")]
    pub photo_url: Option<String>,

    /// Self-selected role, any casing
    #[serde(default)]
    pub role: Option<String>,
}

impl RegisterRequest {
    /// Validates the payload and canonicalizes the role
    pub fn into_new_principal(self) -> Result<NewPrincipal, ValidationError> {
        self.validate().map_err(|_| ValidationError::InvalidEmail)?;

        let role = self
            .role
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(Role::canonicalize)
            .transpose()?;

        Ok(NewPrincipal {
            email: self.email,
            name: self.name,
            photo_url: self.photo_url,
            role,
        })
    }
}

/// Body of `PATCH /users/role/:id`
#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: String,
}

impl SetRoleRequest {
    pub fn role(&self) -> Result<Role, ValidationError> {
        Role::canonicalize(&self.role)
    }
}

/// `?role=` filter of `GET /users`
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
}

impl ListUsersQuery {
    pub fn role(&self) -> Result<Option<Role>, ValidationError> {
        self.role
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(Role::canonicalize)
            .transpose()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsSellerResponse {
    pub is_seller: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsBuyerResponse {
    pub is_buyer: bool,
}
