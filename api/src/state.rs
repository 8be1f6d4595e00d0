//! Shared application state

use std::sync::Arc;

use obc_core::repositories::Collections;
use obc_core::services::{
    CatalogService, CredentialIssuer, EmailLookupOnly, PrincipalService, RoleResolver,
    TokenService,
};
use obc_shared::JwtConfig;

use crate::middleware::auth::{CredentialVerifier, JwtAuth};

/// Services handed to every handler through `web::Data`
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub issuer: CredentialIssuer,
    pub roles: Arc<RoleResolver>,
    pub principals: PrincipalService,
    pub catalog: CatalogService,
}

impl AppState {
    /// Wire every service over the given store handle
    pub fn new(collections: &Collections, jwt: &JwtConfig) -> Self {
        let tokens = Arc::new(TokenService::new(jwt));
        let roles = Arc::new(RoleResolver::new(collections.principals.clone()));
        let policy = Arc::new(EmailLookupOnly::new(collections.principals.clone()));

        Self {
            issuer: CredentialIssuer::new(policy, tokens.clone()),
            principals: PrincipalService::new(collections.principals.clone(), roles.clone()),
            catalog: CatalogService::new(collections),
            roles,
            tokens,
        }
    }

    /// Gate verifying tokens signed by this state's token service
    pub fn gate(&self) -> JwtAuth {
        let verifier: Arc<dyn CredentialVerifier> = self.tokens.clone();
        JwtAuth::new(verifier)
    }
}
