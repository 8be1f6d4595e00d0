//! Mapping of domain errors onto HTTP responses.
//!
//! Every handler converts its failures here, so the status code and error
//! code of a given `DomainError` are the same on every route.

use actix_web::{http::StatusCode, HttpResponse};
use obc_core::errors::{AuthError, DomainError, TokenError};
use obc_shared::{error_codes, ApiResponse, ErrorBody};
use serde_json::json;

/// Message of every rejected credential
pub const FORBIDDEN_ACCESS: &str = "forbidden access";

/// Body of a request without an `Authorization` header
pub const UNAUTHORIZED_ACCESS: &str = "Unauthorized access";

/// `401` answered by the gate when no credential is presented
pub fn unauthorized_access() -> HttpResponse {
    HttpResponse::Unauthorized()
        .content_type("text/plain; charset=utf-8")
        .body(UNAUTHORIZED_ACCESS)
}

/// `403` answered for an invalid credential
pub fn forbidden_access() -> HttpResponse {
    HttpResponse::Forbidden().json(json!({ "message": FORBIDDEN_ACCESS }))
}

/// Status and error payload of a domain error
pub fn classify(error: &DomainError) -> (StatusCode, ErrorBody) {
    let (status, code) = match error {
        DomainError::Auth(auth) => match auth {
            AuthError::Unauthenticated => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
            AuthError::PrincipalNotFound { .. } => {
                (StatusCode::NOT_FOUND, error_codes::PRINCIPAL_NOT_FOUND)
            }
            AuthError::IdentityMismatch
            | AuthError::InsufficientRole { .. }
            | AuthError::RoleNotSelfAssignable { .. } => {
                (StatusCode::FORBIDDEN, error_codes::FORBIDDEN)
            }
        },
        DomainError::Token(TokenError::GenerationFailed) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
        DomainError::Token(_) => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        DomainError::AlreadyExists { .. } => (StatusCode::CONFLICT, error_codes::CONFLICT),
        DomainError::Store { .. } => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::STORE_ERROR),
    };

    let message = match error {
        DomainError::Token(TokenError::GenerationFailed) => "An internal error occurred".to_string(),
        other => other.to_string(),
    };

    (
        status,
        ErrorBody {
            code: code.to_string(),
            message,
        },
    )
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    // Credential failures answer exactly like the gate does
    if matches!(error, DomainError::Token(e) if *e != TokenError::GenerationFailed) {
        log::warn!("Credential rejected: {}", error);
        return forbidden_access();
    }

    let (status, body) = classify(error);
    if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::debug!("Request failed with {}: {}", status, error);
    }

    HttpResponse::build(status).json(ApiResponse::<()>::failure(body.code, body.message))
}
