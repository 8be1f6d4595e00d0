//! Administrative principal endpoints. The acting identity is the gate
//! identity and must hold the admin role.

use actix_web::{web, HttpResponse};

use obc_core::errors::DomainError;
use obc_shared::ApiResponse;

use crate::dto::catalog::DeletedResponse;
use crate::dto::user::{ListUsersQuery, SetRoleRequest};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::parse_document_id;
use crate::state::AppState;

/// Handler for GET /users?role=
pub async fn list_users(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<ListUsersQuery>,
) -> HttpResponse {
    let role = match query.role() {
        Ok(role) => role,
        Err(error) => return handle_domain_error(&DomainError::from(error)),
    };

    match state.principals.list(&auth.email, role).await {
        Ok(principals) => HttpResponse::Ok().json(ApiResponse::success(principals)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /user/{id}
pub async fn delete_user(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse {
    let id = match parse_document_id(&path) {
        Ok(id) => id,
        Err(error) => return handle_domain_error(&DomainError::from(error)),
    };

    match state.principals.delete(&auth.email, id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(DeletedResponse { deleted: true })),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PATCH /users/verify/{id}
///
/// Idempotent: verifying a verified principal answers the same document.
pub async fn verify_user(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse {
    let id = match parse_document_id(&path) {
        Ok(id) => id,
        Err(error) => return handle_domain_error(&DomainError::from(error)),
    };

    match state.principals.verify(&auth.email, id).await {
        Ok(principal) => HttpResponse::Ok().json(ApiResponse::success(principal)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PATCH /users/role/{id}
///
/// # Request Body
///
/// ```json
/// { "role": "seller" }
/// ```
pub async fn set_role(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    request: web::Json<SetRoleRequest>,
) -> HttpResponse {
    let target = parse_document_id(&path).and_then(|id| Ok((id, request.role()?)));
    let (id, role) = match target {
        Ok(target) => target,
        Err(error) => return handle_domain_error(&DomainError::from(error)),
    };

    match state.principals.set_role(&auth.email, id, role).await {
        Ok(principal) => HttpResponse::Ok().json(ApiResponse::success(principal)),
        Err(error) => handle_domain_error(&error),
    }
}
