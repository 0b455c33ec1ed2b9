//! Auth gateway - orchestrates registration and login against the credential
//! store and token service, and authenticates bearer headers for the
//! request-gating middleware.
//!
//! Stateless per request: no session or revocation state is kept.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::Password;
use crate::errors::{AppError, AppResult};
use crate::infra::IdentityRepository;
use crate::services::{Claims, TokenService};

/// Token response returned after successful registration or login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new identity and return a token for it
    async fn register(&self, name: String, email: String, password: String)
        -> AppResult<TokenResponse>;

    /// Login and return a token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Authenticate an `Authorization` header value and return the verified
    /// subject claims
    async fn authenticate(&self, bearer_header: Option<&str>) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService backed by a credential store.
pub struct Authenticator {
    identities: Arc<dyn IdentityRepository>,
    tokens: TokenService,
}

impl Authenticator {
    pub fn new(identities: Arc<dyn IdentityRepository>, tokens: TokenService) -> Self {
        Self { identities, tokens }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> AppResult<TokenResponse> {
        // Shape validation happens in the handler's ValidatedJson extractor;
        // the pre-check below keeps the common case a clean 400 while the
        // store's unique index settles concurrent registrations.
        if self.identities.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = Password::new(&password)?.into_string();
        let identity = self.identities.create(name, email, password_hash).await?;

        let token = self.tokens.issue(identity.id, &identity.email)?;
        Ok(TokenResponse { token })
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let identity = self.identities.find_by_email(&email).await?;

        // SECURITY: verify against a dummy hash when the email is unknown so
        // response timing cannot enumerate registered emails. The error is
        // identical for both failure modes.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let password_hash = identity
            .as_ref()
            .map(|i| i.password_hash.as_str())
            .unwrap_or(dummy_hash);

        let password_valid = Password::from_hash(password_hash.to_string()).verify(&password);

        let identity = match identity {
            Some(identity) if password_valid => identity,
            _ => return Err(AppError::InvalidCredentials),
        };

        let token = self.tokens.issue(identity.id, &identity.email)?;
        Ok(TokenResponse { token })
    }

    async fn authenticate(&self, bearer_header: Option<&str>) -> AppResult<Claims> {
        let header = bearer_header.ok_or(AppError::Unauthorized)?;

        // "Bearer <token>" - anything without a second part is rejected.
        let token = header
            .split_whitespace()
            .nth(1)
            .ok_or(AppError::Unauthorized)?;

        let claims = self.tokens.verify(token)?;

        // Re-confirm the subject still exists; an identity deleted after
        // issuance is reported as not-found.
        if self.identities.find_by_id(claims.sub).await?.is_none() {
            return Err(AppError::NotFound);
        }

        Ok(claims)
    }
}
