//! Unit tests for token service

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use obc_shared::config::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;
use crate::services::token::TokenService;

fn service(secret: &str) -> TokenService {
    TokenService::new(&JwtConfig::new(secret))
}

#[test]
fn test_issued_token_decodes_to_identity() {
    let tokens = service("test-secret");
    let issued = tokens.issue("u@x.com").unwrap();

    let claims = tokens.verify(&issued.token).unwrap();
    assert_eq!(claims.email, "u@x.com");
    assert_eq!(claims.exp - claims.iat, 7 * 86_400);
}

#[test]
fn test_verification_is_idempotent() {
    let tokens = service("test-secret");
    let issued = tokens.issue("u@x.com").unwrap();

    let first = tokens.verify(&issued.token).unwrap();
    let second = tokens.verify(&issued.token).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_two_issuances_are_independently_valid() {
    let tokens = service("test-secret");
    let first = tokens.issue_at("u@x.com", Utc::now() - Duration::seconds(5)).unwrap();
    let second = tokens.issue("u@x.com").unwrap();

    assert_ne!(first.token, second.token);
    assert_eq!(tokens.verify(&first.token).unwrap().email, "u@x.com");
    assert_eq!(tokens.verify(&second.token).unwrap().email, "u@x.com");
}

#[test]
fn test_expired_token_rejected() {
    let tokens = service("test-secret");
    let stale = tokens
        .issue_at("u@x.com", Utc::now() - Duration::days(8))
        .unwrap();

    assert_eq!(tokens.verify(&stale.token), Err(TokenError::Expired));
}

#[test]
fn test_token_expiring_just_now_rejected() {
    let tokens = service("test-secret");
    let stale = tokens
        .issue_at("u@x.com", Utc::now() - Duration::days(7) - Duration::seconds(2))
        .unwrap();

    assert_eq!(tokens.verify(&stale.token), Err(TokenError::Expired));
}

#[test]
fn test_foreign_signature_rejected() {
    let issued = service("other-secret").issue("u@x.com").unwrap();

    assert_eq!(
        service("test-secret").verify(&issued.token),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_garbage_rejected() {
    let tokens = service("test-secret");
    assert_eq!(tokens.verify("garbage"), Err(TokenError::Malformed));
    assert_eq!(tokens.verify(""), Err(TokenError::Malformed));
}

#[test]
fn test_empty_identity_rejected() {
    let claims = Claims::new("", Utc::now(), Duration::days(1)).unwrap();
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    assert!(matches!(
        service("test-secret").verify(&token),
        Err(TokenError::MissingClaim { .. })
    ));
}

#[test]
fn test_configured_validity() {
    let tokens = TokenService::new(&JwtConfig::new("s").with_expiry_days(1));
    assert_eq!(tokens.validity(), Duration::days(1));
    let issued = tokens.issue_at("u@x.com", Utc::now() - Duration::days(2)).unwrap();
    assert_eq!(tokens.verify(&issued.token), Err(TokenError::Expired));
}

#[test]
fn test_overflowing_validity_fails_generation() {
    let tokens = TokenService::new(&JwtConfig::new("s").with_expiry_days(100_000_000));
    assert_eq!(tokens.issue("u@x.com"), Err(TokenError::GenerationFailed));

    let tokens = TokenService::new(&JwtConfig::new("s").with_expiry_days(i64::MAX));
    assert_eq!(tokens.validity(), Duration::MAX);
    assert_eq!(tokens.issue("u@x.com"), Err(TokenError::GenerationFailed));
}
