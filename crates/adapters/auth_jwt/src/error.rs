//! Token decoding errors.

/// A bearer token could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// `jsonwebtoken` rejected the token (bad shape, bad signature, bad JSON).
    #[error("token could not be decoded")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}
