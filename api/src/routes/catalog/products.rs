use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};

use obc_core::errors::{DomainError, ValidationError};
use obc_shared::ApiResponse;

use crate::dto::catalog::{DeletedResponse, OwnerQuery};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::parse_document_id;
use crate::state::AppState;

/// Handler for GET /product/{id}
///
/// Products of the category `id`. The id must be an integer.
pub async fn products_by_category(
    state: web::Data<AppState>,
    _auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse {
    let category_id = match path.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return handle_domain_error(&DomainError::from(ValidationError::InvalidFormat {
                field: "id".to_string(),
            }))
        }
    };

    match state.catalog.products_by_category(category_id).await {
        Ok(products) => HttpResponse::Ok().json(ApiResponse::success(products)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /products?email=
///
/// Only the caller's own listings can be requested. A mismatching `email`
/// is answered with 403 and no query reaches the store.
pub async fn products_by_owner(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<OwnerQuery>,
) -> HttpResponse {
    let requested = query.into_inner().email.unwrap_or_default();

    match state.catalog.products_by_owner(&requested, &auth.email).await {
        Ok(products) => HttpResponse::Ok().json(ApiResponse::success(products)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /products
///
/// The owner `email` defaults to the caller and may not name anyone else.
pub async fn add_product(
    state: web::Data<AppState>,
    auth: AuthContext,
    body: web::Json<Map<String, Value>>,
) -> HttpResponse {
    match state.catalog.add_product(&auth.email, body.into_inner()).await {
        Ok(product) => HttpResponse::Created().json(ApiResponse::success(product)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /product/{id}
pub async fn delete_product(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse {
    let id = match parse_document_id(&path) {
        Ok(id) => id,
        Err(error) => return handle_domain_error(&DomainError::from(error)),
    };

    match state.catalog.delete_product(id).await {
        Ok(deleted) => {
            log::info!("{} deleted product {}: {}", auth.email, id, deleted);
            HttpResponse::Ok().json(ApiResponse::success(DeletedResponse { deleted }))
        }
        Err(error) => handle_domain_error(&error),
    }
}
