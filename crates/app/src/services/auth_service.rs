//! Auth service — bearer token extraction and validation.
//!
//! A token is "valid" when it decodes. There is no expiry, audience or
//! issuer check and no session state.

use barzmap_domain::claims::Claims;
use barzmap_domain::error::{AuthError, BarzError};

use crate::ports::TokenDecoder;

const BEARER_PREFIX: &str = "Bearer ";

/// Return the token carried by an `Authorization` header value.
///
/// # Errors
///
/// Returns [`AuthError::MissingHeader`] when `header` is `None`, and
/// [`AuthError::MalformedHeader`] when it lacks the `Bearer ` prefix or the
/// token after it is empty.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MalformedHeader)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}

/// Application service for token checks.
pub struct AuthService<D> {
    decoder: D,
}

impl<D: TokenDecoder> AuthService<D> {
    /// Create a new service backed by the given decoder.
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// Decode the bearer token carried by `header`.
    ///
    /// # Errors
    ///
    /// Returns [`BarzError::Unauthorized`] when the header is missing or
    /// malformed, or when the token does not decode.
    pub fn claims(&self, header: Option<&str>) -> Result<Claims, BarzError> {
        let token = bearer_token(header)?;
        self.decoder.decode(token).map_err(|err| {
            tracing::debug!(error = %err, "token rejected");
            BarzError::from(AuthError::InvalidToken)
        })
    }

    /// Check that the bearer token in `header` decodes.
    ///
    /// Only ever answers `true`: absence, malformed headers and undecodable
    /// tokens are all [`BarzError::Unauthorized`].
    ///
    /// # Errors
    ///
    /// Returns [`BarzError::Unauthorized`] as [`Self::claims`] does.
    pub fn validate(&self, header: Option<&str>) -> Result<bool, BarzError> {
        let claims = self.claims(header)?;
        tracing::debug!(subject = claims.subject(), "token decoded");
        Ok(true)
    }
}
