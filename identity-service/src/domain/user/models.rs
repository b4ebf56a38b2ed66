use std::fmt;
use std::str::FromStr;

use auth::Claims;
use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::EmailError;

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Stored and
/// compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `Empty` - Email is empty
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Transient credential pair for a single register/login call.
///
/// Never persisted; only the hash of the password ever reaches storage.
#[derive(Clone)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: String,
}

impl Credentials {
    /// Validate a raw (email, password) pair.
    ///
    /// # Errors
    /// * `EmailError` - Email is empty or malformed
    pub fn new(email: &str, password: &str) -> Result<Self, EmailError> {
        let email = EmailAddress::new(email.to_string())?;

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }
}

// The plaintext password must never reach logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Stored user record, keyed by unique email.
///
/// Created once at registration and never updated or deleted by this core.
/// The hash never leaves the directory layer except for verification.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful register or login call.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Opaque bearer token string
    pub access_token: String,
    /// The claim embedded in the token
    pub claims: Claims,
}
