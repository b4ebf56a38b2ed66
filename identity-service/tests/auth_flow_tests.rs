mod common;

use std::sync::Arc;

use chrono::Duration;
use common::InMemoryDirectory;
use identity_service::domain::user::ports::AuthServicePort;
use identity_service::domain::user::service::AuthService;
use identity_service::user::errors::AuthError;

const SECRET: &[u8] = b"integration_secret_at_least_32_bytes!";

fn service_with_directory(ttl: Duration) -> (AuthService<InMemoryDirectory>, Arc<InMemoryDirectory>) {
    let directory = Arc::new(InMemoryDirectory::new());
    let service = AuthService::new(Arc::clone(&directory), SECRET, ttl);
    (service, directory)
}

#[tokio::test]
async fn test_register_login_validate_scenario() {
    let (service, directory) = service_with_directory(Duration::hours(1));

    // Register issues a token bound to the email
    let first = service.register("a@x.com", "secret1").await.unwrap();
    assert_eq!(first.claims.email, "a@x.com");

    // Login with the same credentials succeeds with the same claim email
    let second = service.login("a@x.com", "secret1").await.unwrap();
    assert_eq!(second.claims.email, "a@x.com");

    // Wrong password fails with the merged credential error
    let result = service.login("a@x.com", "wrong").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));

    // Re-registering fails and leaves exactly one record
    let result = service.register("a@x.com", "other").await;
    assert!(matches!(result, Err(AuthError::UserAlreadyExists(_))));
    assert_eq!(directory.record_count(), 1);

    // Both issued tokens validate to the same claim email
    let claims = service.validate_token(&first.access_token).unwrap();
    assert_eq!(claims.email, "a@x.com");
    let claims = service.validate_token(&second.access_token).unwrap();
    assert_eq!(claims.email, "a@x.com");
}

#[tokio::test]
async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
    let (service, _directory) = service_with_directory(Duration::hours(1));

    service.register("a@x.com", "secret1").await.unwrap();

    let wrong_password = service.login("a@x.com", "wrong").await;
    let unknown_email = service.login("b@x.com", "secret1").await;

    assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn test_concurrent_registration_creates_one_record() {
    let (service, directory) = service_with_directory(Duration::hours(1));
    let service = Arc::new(service);

    let mut handles = Vec::new();
    for i in 0..4 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.register("race@x.com", &format!("password{}", i)).await
        }));
    }

    let mut successes = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AuthError::UserAlreadyExists(_)) => duplicates += 1,
            Err(other) => panic!("unexpected failure: {:?}", other),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 3);
    assert_eq!(directory.record_count(), 1);
}

#[tokio::test]
async fn test_zero_ttl_token_expires_immediately() {
    let (service, _directory) = service_with_directory(Duration::zero());

    let issued = service.register("a@x.com", "secret1").await.unwrap();

    let result = service.validate_token(&issued.access_token);
    assert!(matches!(result, Err(AuthError::TokenExpired)));
}

#[tokio::test]
async fn test_tampered_signature_never_validates() {
    let (service, _directory) = service_with_directory(Duration::hours(1));

    let issued = service.register("a@x.com", "secret1").await.unwrap();

    let last = issued.access_token.chars().last().unwrap();
    let replacement = if last == 'A' { 'B' } else { 'A' };
    let mut tampered = issued.access_token.clone();
    tampered.pop();
    tampered.push(replacement);

    let result = service.validate_token(&tampered);
    assert!(matches!(result, Err(AuthError::InvalidSignature)));
}

#[tokio::test]
async fn test_token_survives_user_disappearing() {
    // Stateless validation: the directory is never consulted, so a token
    // outlives the directory it was registered against.
    let (service, _directory) = service_with_directory(Duration::hours(1));
    let issued = service.register("a@x.com", "secret1").await.unwrap();

    let (fresh_service, _fresh_directory) = {
        let directory = Arc::new(InMemoryDirectory::new());
        (
            AuthService::new(Arc::clone(&directory), SECRET, Duration::hours(1)),
            directory,
        )
    };

    let claims = fresh_service.validate_token(&issued.access_token).unwrap();
    assert_eq!(claims.email, "a@x.com");
}
