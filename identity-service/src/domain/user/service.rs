use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::UserRecord;
use crate::user::errors::AuthError;
use crate::user::errors::DirectoryError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserDirectory;

/// Authentication service orchestrating directory, hasher, and token issuer.
///
/// All state is read-only after construction; concurrent calls need no
/// coordination. Same-email registration races resolve at the storage
/// uniqueness constraint, not in-process.
pub struct AuthService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

impl<D> AuthService<D>
where
    D: UserDirectory,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `directory` - User persistence implementation
    /// * `jwt_secret` - Process-wide signing secret, loaded once at startup
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(directory: Arc<D>, jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            directory,
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
        }
    }

    fn issue_token(&self, email: &str) -> Result<IssuedToken, AuthError> {
        let claims = Claims::for_email(email, self.token_ttl);

        let access_token = self.jwt_handler.issue(&claims).map_err(|e| {
            tracing::error!(error = %e, "token issuance failed");
            AuthError::InternalError(e.to_string())
        })?;

        Ok(IssuedToken {
            access_token,
            claims,
        })
    }
}

fn map_directory_err(err: DirectoryError) -> AuthError {
    if let DirectoryError::Unavailable(message) = &err {
        tracing::warn!(error = %message, "user directory unavailable");
    }
    AuthError::from(err)
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: UserDirectory,
{
    async fn register(&self, email: &str, password: &str) -> Result<IssuedToken, AuthError> {
        if password.is_empty() {
            return Err(AuthError::InvalidInput(
                "Password must not be empty".to_string(),
            ));
        }
        let credentials = Credentials::new(email, password)?;

        // Advisory pre-check; the storage uniqueness constraint is
        // authoritative under concurrent registration.
        if self
            .directory
            .find_by_email(&credentials.email)
            .await
            .map_err(map_directory_err)?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists(credentials.email.to_string()));
        }

        let password_hash = self.password_hasher.hash(&credentials.password).map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            AuthError::from(e)
        })?;

        let record = UserRecord {
            email: credentials.email,
            password_hash,
            created_at: Utc::now(),
        };

        // A concurrent registration that won the race surfaces here as
        // DuplicateUser; propagate rather than retry.
        let created = self
            .directory
            .create(record)
            .await
            .map_err(map_directory_err)?;

        self.issue_token(created.email.as_str())
    }

    async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AuthError> {
        if password.is_empty() {
            return Err(AuthError::InvalidInput(
                "Password must not be empty".to_string(),
            ));
        }
        let credentials = Credentials::new(email, password)?;

        let record = match self
            .directory
            .find_by_email(&credentials.email)
            .await
            .map_err(map_directory_err)?
        {
            Some(record) => record,
            None => {
                // Burn a comparable amount of hashing work so an unknown
                // email and a wrong password have similar latency.
                let _ = self.password_hasher.hash(&credentials.password);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(&credentials.password, &record.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_token(record.email.as_str())
    }

    fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.jwt_handler.verify(token)?)
    }
}
