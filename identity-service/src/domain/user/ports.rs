use async_trait::async_trait;
use auth::Claims;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::UserRecord;
use crate::user::errors::AuthError;
use crate::user::errors::DirectoryError;

/// Persistent store of user records keyed by unique email.
///
/// Records are created once at registration and never updated or deleted.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Retrieve a record by email address.
    ///
    /// # Returns
    /// Optional record (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Storage timed out or is unreachable
    /// * `Internal` - Storage operation failed
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserRecord>, DirectoryError>;

    /// Persist a new record.
    ///
    /// Uniqueness is enforced atomically by the storage layer: at most one
    /// record per email may ever exist, even under concurrent creation of
    /// the same email.
    ///
    /// # Errors
    /// * `DuplicateUser` - A record with this email already exists
    /// * `Unavailable` - Storage timed out or is unreachable
    /// * `Internal` - Storage operation failed
    async fn create(&self, record: UserRecord) -> Result<UserRecord, DirectoryError>;
}

/// Port for the authentication use cases.
///
/// Each call is independent and one-shot; no state persists across calls
/// beyond the shared directory and the process-wide signing secret.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue a token for them.
    ///
    /// # Errors
    /// * `InvalidInput` - Empty or malformed email/password
    /// * `UserAlreadyExists` - Email is already registered
    /// * `StorageUnavailable` - Directory timed out
    /// * `InternalError` - Hashing or signing primitive failed
    async fn register(&self, email: &str, password: &str) -> Result<IssuedToken, AuthError>;

    /// Authenticate an existing user and issue a token for them.
    ///
    /// # Errors
    /// * `InvalidInput` - Empty or malformed email/password
    /// * `InvalidCredentials` - Unknown email or wrong password (merged)
    /// * `StorageUnavailable` - Directory timed out
    /// * `InternalError` - Signing primitive failed
    async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AuthError>;

    /// Verify a bearer token and return its claim.
    ///
    /// Stateless: never consults the directory, so a validly signed,
    /// unexpired token is accepted even if the user no longer exists.
    ///
    /// # Errors
    /// * `MalformedToken` - Token cannot be parsed
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `TokenExpired` - Token expiry has passed
    fn validate_token(&self, token: &str) -> Result<Claims, AuthError>;
}
