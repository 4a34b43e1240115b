//! # barzmap-adapter-auth-jwt
//!
//! Token decoding adapter built on [jsonwebtoken](https://docs.rs/jsonwebtoken).
//!
//! ## Responsibilities
//! - Implement the `TokenDecoder` port defined in `barzmap-app::ports::token`
//! - Verify HS256 signatures when a secret is configured, decode only otherwise
//! - Never check expiry, audience or issuer
//!
//! ## Dependency rule
//! Depends on `barzmap-app` (for the port trait) and `barzmap-domain` (for claims).

pub mod decoder;
pub mod error;

pub use decoder::JwtDecoder;
pub use error::TokenError;
