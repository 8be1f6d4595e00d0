use actix_web::{web, HttpResponse};

use obc_shared::ApiResponse;

use crate::handlers::error::handle_domain_error;
use crate::state::AppState;

/// Handler for GET /categories
pub async fn list_categories(state: web::Data<AppState>) -> HttpResponse {
    match state.catalog.list_categories().await {
        Ok(categories) => HttpResponse::Ok().json(ApiResponse::success(categories)),
        Err(error) => handle_domain_error(&error),
    }
}
