//! Bearer-token gate for protected endpoints.
//!
//! The gate extracts the token from the `Authorization` header, verifies its
//! signature and expiry, and injects the decoded identity into the request.
//! It never touches the store: acceptance depends on the token and the clock
//! only.
//!
//! Rejections terminate the request before any handler runs:
//! - no `Authorization` header, or a blank one: `401`, plain text
//!   `Unauthorized access`
//! - anything else that is not a valid `Bearer <token>`: `403`,
//!   `{"message": "forbidden access"}`

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use obc_core::{
    domain::entities::token::Claims,
    errors::{AuthError, TokenError},
    services::TokenService,
};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::{forbidden_access, handle_domain_error, unauthorized_access};

/// Identity injected into requests accepted by the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Email decoded from the token
    pub email: String,
}

impl AuthContext {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            email: claims.email,
        }
    }
}

/// Token verification used by the gate
pub trait CredentialVerifier: Send + Sync {
    fn verify_credential(&self, token: &str) -> Result<Claims, TokenError>;
}

impl CredentialVerifier for TokenService {
    fn verify_credential(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token)
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    verifier: Arc<dyn CredentialVerifier>,
}

impl JwtAuth {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            if !has_authorization(&req) {
                log::debug!("Rejected {}: no Authorization header", req.path());
                return Ok(req.into_response(unauthorized_access()).map_into_right_body());
            }

            let claims = match extract_bearer_token(&req) {
                Some(token) => verifier.verify_credential(&token),
                None => Err(TokenError::Malformed),
            };

            match claims {
                Ok(claims) => {
                    req.extensions_mut().insert(AuthContext::from_claims(claims));
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(e) => {
                    log::warn!("Rejected {}: {}", req.path(), e);
                    Ok(req.into_response(forbidden_access()).map_into_right_body())
                }
            }
        })
    }
}

/// Whether the request carries a non-blank Authorization header
fn has_authorization(req: &ServiceRequest) -> bool {
    req.headers()
        .get(AUTHORIZATION)
        .is_some_and(|value| !value.as_bytes().iter().all(u8::is_ascii_whitespace))
}

/// Extracts a non-empty Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for the gate identity. Outside the gate it fails with `401`.
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                let response = handle_domain_error(&AuthError::Unauthenticated.into());
                InternalError::from_response("missing authentication context", response).into()
            });

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[::core::prelude::v1::test]
    fn test_extract_bearer_token() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[::core::prelude::v1::test]
    fn test_has_authorization() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc"))
            .to_srv_request();
        assert!(has_authorization(&req));

        let req_garbage = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "garbage"))
            .to_srv_request();
        assert!(has_authorization(&req_garbage));

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, ""))
            .to_srv_request();
        assert!(!has_authorization(&req_empty));

        let req_blank = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "   "))
            .to_srv_request();
        assert!(!has_authorization(&req_blank));

        assert!(!has_authorization(&test::TestRequest::default().to_srv_request()));
    }

    #[actix_web::test]
    async fn test_auth_context_missing_is_unauthorized() {
        let req = test::TestRequest::default().to_http_request();
        let err = AuthContext::extract(&req).await.unwrap_err();
        let response = err.error_response();
        assert_eq!(response.status(), 401);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    }
}
