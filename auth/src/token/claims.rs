use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claim embedded in access tokens.
///
/// Self-contained: validity is determined purely by signature and expiry,
/// with no server-side token store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Email address of the authenticated identity
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp, absolute wall-clock)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated email with an absolute expiry.
    ///
    /// # Arguments
    /// * `email` - Email address to bind the token to
    /// * `ttl` - Time until the token expires, added to the current time
    ///
    /// # Returns
    /// Claims with email, iat, and exp set
    pub fn for_email(email: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            email: email.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check whether the claim is expired at the given timestamp.
    ///
    /// The boundary is inclusive: a token is expired from the exact second
    /// of its expiry onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_email_stamps_ttl() {
        let claims = Claims::for_email("alice@example.com", Duration::hours(1));

        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_is_expired_boundary() {
        let claims = Claims {
            email: "alice@example.com".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Expired exactly at exp
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let claims = Claims::for_email("alice@example.com", Duration::zero());
        assert!(claims.is_expired(Utc::now().timestamp()));
    }
}
