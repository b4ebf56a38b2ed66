use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email must not be empty")]
    Empty,

    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Errors surfaced by the user directory storage layer.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// A record with this email already exists. The storage-level uniqueness
    /// constraint is the sole source of truth for duplicate detection.
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    /// Transient infrastructure failure (timeout, connection loss). Safe to
    /// retry by the caller.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage error: {0}")]
    Internal(String),
}

/// Top-level error for authentication operations.
///
/// Surfaced to the transport adapter as tagged results; the adapter alone
/// decides user-facing messages and status codes.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Missing/empty required field or malformed email.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    /// Unknown email or wrong password, intentionally merged so callers
    /// cannot enumerate registered emails.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token is expired")]
    TokenExpired,

    /// Transient infrastructure failure; safe to retry.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Unexpected failure in hashing/signing primitives or storage. Logged,
    /// never retried automatically.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<EmailError> for AuthError {
    fn from(err: EmailError) -> Self {
        AuthError::InvalidInput(err.to_string())
    }
}

impl From<DirectoryError> for AuthError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::DuplicateUser(email) => AuthError::UserAlreadyExists(email),
            DirectoryError::Unavailable(message) => AuthError::StorageUnavailable(message),
            DirectoryError::Internal(message) => AuthError::InternalError(message),
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::InternalError(err.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Malformed(message) => AuthError::MalformedToken(message),
            TokenError::InvalidSignature => AuthError::InvalidSignature,
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::EncodingFailed(message) => AuthError::InternalError(message),
        }
    }
}
