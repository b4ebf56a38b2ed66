use thiserror::Error;

/// Error type for password operations.
///
/// Verification does not fail: a stored hash that cannot be parsed simply
/// does not match. Only the hashing side can error, and only when the
/// underlying primitive runs out of resources.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
