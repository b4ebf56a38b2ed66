use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signed bearer token issuer and verifier.
///
/// Uses HS256 (HMAC with SHA-256). The secret is loaded once at startup and
/// shared process-wide; key rotation is not supported.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new token handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for the given claims.
    ///
    /// # Arguments
    /// * `claims` - Identity claims to embed
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing primitive failed
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify and decode a token.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed or decoded
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `Expired` - Current time is at or past the embedded expiry
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        // jsonwebtoken treats exp == now as still valid; the expiry boundary
        // here is inclusive.
        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
