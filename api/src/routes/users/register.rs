use actix_web::{web, HttpResponse};

use obc_core::errors::DomainError;
use obc_shared::ApiResponse;

use crate::dto::user::RegisterRequest;
use crate::handlers::error::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /users
///
/// # Request Body
///
/// ```json
/// { "email": "reader@example.com", "name": "Reader", "photo_url": "...", "role": "buyer" }
/// ```
///
/// # Response
///
/// - 201 Created: `{ "ok": true, "data": <principal> }` for a new principal
/// - 200 OK: same shape, the already registered principal unchanged
///
/// ## Errors
/// - 400 Bad Request: invalid email or unknown role
/// - 403 Forbidden: `admin` requested
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    let new_principal = match request.into_inner().into_new_principal() {
        Ok(new_principal) => new_principal,
        Err(error) => return handle_domain_error(&DomainError::from(error)),
    };

    match state.principals.register(new_principal).await {
        Ok(registration) if registration.created => {
            HttpResponse::Created().json(ApiResponse::success(registration.principal))
        }
        Ok(registration) => HttpResponse::Ok().json(ApiResponse::success(registration.principal)),
        Err(error) => handle_domain_error(&error),
    }
}
