//! Token port — decoding of bearer tokens.

use barzmap_domain::claims::Claims;

/// Decodes a raw bearer token into its claims.
///
/// Decoding is synchronous and local: no key fetch, no session lookup.
pub trait TokenDecoder {
    /// Error reported when the token does not decode.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decode `token`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the token is not a decodable JWT.
    fn decode(&self, token: &str) -> Result<Claims, Self::Error>;
}
