//! Credential authentication core.
//!
//! Registers users with a unique email and a hashed password, authenticates
//! returning users, and issues time-bounded bearer tokens that can be
//! verified without a storage lookup. Transport adapters live outside this
//! crate and call [`domain::user::ports::AuthServicePort`].

pub mod config;
pub mod domain;
pub mod outbound;

pub use domain::user;
pub use outbound::repositories;
