use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are kept distinct so callers can log and respond
/// appropriately instead of collapsing everything into one boolean.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}
