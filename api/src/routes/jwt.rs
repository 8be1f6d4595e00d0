use actix_web::{web, HttpResponse};

use obc_core::errors::{DomainError, ValidationError};

use crate::dto::token::{TokenQuery, TokenResponse};
use crate::handlers::error::classify;
use crate::state::AppState;

/// Handler for GET /jwt?email=
///
/// Issues a bearer token for a registered email. No secret is checked: the
/// token only asserts that the email is on file.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "token": "eyJ..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `email` missing or empty
/// - 404 Not Found: no principal with this email
/// - 500 Internal Server Error: store failure
pub async fn issue_token(
    state: web::Data<AppState>,
    query: web::Query<TokenQuery>,
) -> HttpResponse {
    let email = query.into_inner().email.unwrap_or_default();

    let result = if email.trim().is_empty() {
        Err(DomainError::from(ValidationError::RequiredField {
            field: "email".to_string(),
        }))
    } else {
        state.issuer.issue(&email).await
    };

    match result {
        Ok(issued) => HttpResponse::Ok().json(TokenResponse::issued(issued.token)),
        Err(error) => {
            let (status, body) = classify(&error);
            if status.is_server_error() {
                log::error!("Token issuance failed: {:?}", error);
            }
            HttpResponse::build(status).json(TokenResponse::failed(body))
        }
    }
}
