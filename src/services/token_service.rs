//! Token service - issues and verifies signed, time-limited bearer tokens.
//!
//! Tokens are self-contained HS256 JWTs binding a subject id and email.
//! Nothing is persisted; the server is stateless with respect to tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issues and verifies bearer tokens with a fixed lifetime.
///
/// The signing secret is process-wide configuration and immutable for the
/// process lifetime; secret rotation is out of scope.
pub struct TokenService {
    config: Config,
}

impl TokenService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Issue a signed token for the given subject.
    pub fn issue(&self, subject_id: i32, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: subject_id,
            email: email.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )
        .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
    }

    /// Verify a token string and extract its claims.
    ///
    /// Fails with `TokenExpired` once wall-clock time passes the embedded
    /// expiry and with `TokenMalformed` for any signature or structure
    /// problem. Subject existence is not checked here.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let result = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        );

        match result {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(AppError::TokenExpired),
                _ => Err(AppError::TokenMalformed),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_service() -> TokenService {
        TokenService::new(Config::with_secret("test-secret-key-for-testing-32ch!"))
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = token_service();
        let token = service.issue(7, "ann@x.com").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "ann@x.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_lifetime_is_24_hours() {
        let service = token_service();
        let token = service.issue(1, "a@b.c").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = token_service();
        let result = service.verify("not-a-token");

        assert!(matches!(result.unwrap_err(), AppError::TokenMalformed));
    }

    #[test]
    fn test_wrong_secret_is_malformed() {
        let service = token_service();
        let token = service.issue(1, "a@b.c").unwrap();

        let other = TokenService::new(Config::with_secret("another-secret-key-of-32-chars!!!"));
        let result = other.verify(&token);

        assert!(matches!(result.unwrap_err(), AppError::TokenMalformed));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = token_service();

        // Forge an already-expired token with the same secret. Expiry must be
        // beyond the default 60s validation leeway.
        let now = Utc::now();
        let claims = Claims {
            sub: 1,
            email: "a@b.c".to_string(),
            exp: (now - Duration::hours(1)).timestamp(),
            iat: (now - Duration::hours(25)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret-key-for-testing-32ch!".as_bytes()),
        )
        .unwrap();

        let result = service.verify(&token);
        assert!(matches!(result.unwrap_err(), AppError::TokenExpired));
    }
}
