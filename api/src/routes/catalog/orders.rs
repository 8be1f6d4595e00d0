use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};

use obc_shared::ApiResponse;

use crate::dto::catalog::OwnerQuery;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for POST /orders
pub async fn add_order(
    state: web::Data<AppState>,
    body: web::Json<Map<String, Value>>,
) -> HttpResponse {
    match state.catalog.add_order(body.into_inner()).await {
        Ok(order) => HttpResponse::Created().json(ApiResponse::success(order)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /orders?email=
pub async fn orders_by_owner(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<OwnerQuery>,
) -> HttpResponse {
    let requested = query.into_inner().email.unwrap_or_default();

    match state.catalog.orders_by_owner(&requested, &auth.email).await {
        Ok(orders) => HttpResponse::Ok().json(ApiResponse::success(orders)),
        Err(error) => handle_domain_error(&error),
    }
}
