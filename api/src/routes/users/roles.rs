//! Role predicates
//!
//! A caller may only ask about their own identity. Any other email in the
//! path is denied before the store is consulted.

use actix_web::{web, HttpResponse};

use obc_core::domain::entities::principal::Role;
use obc_core::errors::DomainError;
use obc_core::services::ensure_same_identity;

use crate::dto::user::{IsAdminResponse, IsBuyerResponse, IsSellerResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

async fn holds_role(
    state: &AppState,
    auth: &AuthContext,
    email: &str,
    role: Role,
) -> Result<bool, DomainError> {
    ensure_same_identity(email, &auth.email)?;
    state.roles.has_role(email, role).await
}

/// Handler for GET /users/admin/{email}
pub async fn is_admin(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse {
    match holds_role(&state, &auth, &path, Role::Admin).await {
        Ok(is_admin) => HttpResponse::Ok().json(IsAdminResponse { is_admin }),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /users/seller/{email}
pub async fn is_seller(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse {
    match holds_role(&state, &auth, &path, Role::Seller).await {
        Ok(is_seller) => HttpResponse::Ok().json(IsSellerResponse { is_seller }),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /users/buyer/{email}
pub async fn is_buyer(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse {
    match holds_role(&state, &auth, &path, Role::Buyer).await {
        Ok(is_buyer) => HttpResponse::Ok().json(IsBuyerResponse { is_buyer }),
        Err(error) => handle_domain_error(&error),
    }
}
