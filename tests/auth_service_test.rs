//! Auth service unit tests with a mocked credential store.

use std::sync::Arc;

use chrono::Utc;

use user_directory::config::Config;
use user_directory::domain::{Identity, Password};
use user_directory::errors::AppError;
use user_directory::infra::MockIdentityRepository;
use user_directory::services::{AuthService, Authenticator, TokenService};

const TEST_SECRET: &str = "test-secret-key-for-testing-32ch!";

fn authenticator(repo: MockIdentityRepository) -> Authenticator {
    Authenticator::new(
        Arc::new(repo),
        TokenService::new(Config::with_secret(TEST_SECRET)),
    )
}

/// A token service sharing the authenticator's secret, for decoding tokens
/// in assertions and forging valid tokens for authenticate tests.
fn token_service() -> TokenService {
    TokenService::new(Config::with_secret(TEST_SECRET))
}

fn test_identity(id: i32, email: &str, password: &str) -> Identity {
    let now = Utc::now();
    Identity {
        id,
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: Password::new(password)
            .expect("Hashing should succeed")
            .into_string(),
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_register_issues_verifiable_token() {
    let mut repo = MockIdentityRepository::new();
    repo.expect_find_by_email()
        .withf(|email| email == "ann@x.com")
        .returning(|_| Ok(None));
    repo.expect_create()
        .returning(|name, email, hash| {
            let now = Utc::now();
            Ok(Identity {
                id: 42,
                name,
                email,
                password_hash: hash,
                created_at: now,
                updated_at: now,
            })
        });

    let service = authenticator(repo);
    let response = service
        .register(
            "Ann Smith".to_string(),
            "ann@x.com".to_string(),
            "secret1".to_string(),
        )
        .await
        .unwrap();

    let claims = token_service().verify(&response.token).unwrap();
    assert_eq!(claims.sub, 42);
    assert_eq!(claims.email, "ann@x.com");
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
}

#[tokio::test]
async fn test_register_duplicate_email_rejected() {
    let mut repo = MockIdentityRepository::new();
    repo.expect_find_by_email()
        .returning(|email| Ok(Some(test_identity(1, email, "secret1"))));
    // create must never run when the pre-check finds the email taken
    repo.expect_create().times(0);

    let service = authenticator(repo);
    let result = service
        .register(
            "Ann Smith".to_string(),
            "ann@x.com".to_string(),
            "secret1".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::DuplicateEmail));
}

#[tokio::test]
async fn test_register_insert_race_surfaces_duplicate() {
    // A concurrent registration can pass the pre-check and lose the insert
    // race; the unique index rejection must surface as the same error.
    let mut repo = MockIdentityRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create()
        .returning(|_, _, _| Err(AppError::DuplicateEmail));

    let service = authenticator(repo);
    let result = service
        .register(
            "Ann Smith".to_string(),
            "ann@x.com".to_string(),
            "secret1".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::DuplicateEmail));
}

#[tokio::test]
async fn test_register_short_password_rejected_before_insert() {
    let mut repo = MockIdentityRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create().times(0);

    let service = authenticator(repo);
    let result = service
        .register(
            "Ann Smith".to_string(),
            "ann@x.com".to_string(),
            "five!".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_login_success() {
    let mut repo = MockIdentityRepository::new();
    repo.expect_find_by_email()
        .returning(|email| Ok(Some(test_identity(7, email, "secret1"))));

    let service = authenticator(repo);
    let response = service
        .login("ann@x.com".to_string(), "secret1".to_string())
        .await
        .unwrap();

    let claims = token_service().verify(&response.token).unwrap();
    assert_eq!(claims.sub, 7);
    assert_eq!(claims.email, "ann@x.com");
}

#[tokio::test]
async fn test_login_unknown_email_and_wrong_password_are_indistinguishable() {
    let mut unknown_repo = MockIdentityRepository::new();
    unknown_repo.expect_find_by_email().returning(|_| Ok(None));

    let mut wrong_repo = MockIdentityRepository::new();
    wrong_repo
        .expect_find_by_email()
        .returning(|email| Ok(Some(test_identity(7, email, "secret1"))));

    let unknown_err = authenticator(unknown_repo)
        .login("ghost@x.com".to_string(), "secret1".to_string())
        .await
        .unwrap_err();
    let wrong_err = authenticator(wrong_repo)
        .login("ann@x.com".to_string(), "not-the-password".to_string())
        .await
        .unwrap_err();

    assert!(matches!(unknown_err, AppError::InvalidCredentials));
    assert!(matches!(wrong_err, AppError::InvalidCredentials));
    // The messages must match exactly so responses cannot enumerate emails
    assert_eq!(unknown_err.to_string(), wrong_err.to_string());
}

#[tokio::test]
async fn test_authenticate_missing_header() {
    let service = authenticator(MockIdentityRepository::new());
    let result = service.authenticate(None).await;

    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn test_authenticate_header_without_token() {
    let service = authenticator(MockIdentityRepository::new());
    let result = service.authenticate(Some("Bearer")).await;

    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn test_authenticate_garbage_token() {
    let service = authenticator(MockIdentityRepository::new());
    let result = service.authenticate(Some("Bearer not-a-token")).await;

    assert!(matches!(result.unwrap_err(), AppError::TokenMalformed));
}

#[tokio::test]
async fn test_authenticate_deleted_identity_is_not_found() {
    let token = token_service().issue(7, "ann@x.com").unwrap();

    let mut repo = MockIdentityRepository::new();
    repo.expect_find_by_id()
        .with(mockall::predicate::eq(7))
        .returning(|_| Ok(None));

    let service = authenticator(repo);
    let header = format!("Bearer {}", token);
    let result = service.authenticate(Some(&header)).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_authenticate_success() {
    let token = token_service().issue(7, "ann@x.com").unwrap();

    let mut repo = MockIdentityRepository::new();
    repo.expect_find_by_id()
        .returning(|id| Ok(Some(test_identity(id, "ann@x.com", "secret1"))));

    let service = authenticator(repo);
    let header = format!("Bearer {}", token);
    let claims = service.authenticate(Some(&header)).await.unwrap();

    assert_eq!(claims.sub, 7);
    assert_eq!(claims.email, "ann@x.com");
}
