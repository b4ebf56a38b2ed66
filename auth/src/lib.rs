//! Credential primitives library
//!
//! Provides the cryptographic building blocks for authentication:
//! - Password hashing (Argon2id)
//! - Signed bearer token issuance and verification (JWT, HS256)
//!
//! The library is deliberately storage-free: it never looks up users and
//! never persists anything. A service layer owns orchestration and injects
//! the process-wide signing secret at construction.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_email("alice@example.com", Duration::hours(1));
//! let token = handler.issue(&claims).unwrap();
//! let decoded = handler.verify(&token).unwrap();
//! assert_eq!(decoded.email, "alice@example.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::JwtHandler;
pub use token::TokenError;
