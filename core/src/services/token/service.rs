//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use obc_shared::config::JwtConfig;

use crate::domain::entities::token::{Claims, IssuedToken};
use crate::errors::TokenError;

/// Service for signing and verifying identity tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validity: Duration,
}

impl TokenService {
    /// Creates a new token service keyed by the process-wide secret
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            validity: Duration::try_days(config.expiry_days).unwrap_or(Duration::MAX),
        }
    }

    /// Validity window of every issued token
    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Signs a token asserting `email`, valid from now
    pub fn issue(&self, email: &str) -> Result<IssuedToken, TokenError> {
        self.issue_at(email, Utc::now())
    }

    /// Signs a token asserting `email` as if issued at `issued_at`
    pub fn issue_at(&self, email: &str, issued_at: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        let claims = Claims::new(email, issued_at, self.validity).ok_or_else(|| {
            tracing::error!("Token expiry overflows for validity {}", self.validity);
            TokenError::GenerationFailed
        })?;
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)?;

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Verifies a token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid, unexpired, identity present
    /// * `Err(TokenError)` - Token is malformed, expired, or forged
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        if token_data.claims.email.is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "email".to_string(),
            });
        }

        Ok(token_data.claims)
    }
}
