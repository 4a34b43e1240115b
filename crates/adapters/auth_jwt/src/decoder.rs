//! [`TokenDecoder`] implementation for JWTs.

use std::collections::HashSet;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use barzmap_app::ports::TokenDecoder;
use barzmap_domain::claims::Claims;

use crate::error::TokenError;

/// Decodes bearer tokens as JWTs.
///
/// With a secret, the HS256 signature must match. Without one the signature
/// is not checked at all and any well-formed JWT decodes.
pub struct JwtDecoder {
    key: DecodingKey,
    validation: Validation,
    verify_signature: bool,
}

impl JwtDecoder {
    /// Build a decoder that verifies HS256 signatures against `secret`.
    #[must_use]
    pub fn with_secret(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
            validation: claims_free_validation(Algorithm::HS256),
            verify_signature: true,
        }
    }

    /// Build a decoder that only decodes, without checking signatures.
    #[must_use]
    pub fn unverified() -> Self {
        let mut validation = claims_free_validation(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        Self {
            key: DecodingKey::from_secret(&[]),
            validation,
            verify_signature: false,
        }
    }

    /// Pick [`Self::with_secret`] or [`Self::unverified`] depending on
    /// whether a secret is configured.
    #[must_use]
    pub fn from_optional_secret(secret: Option<&str>) -> Self {
        match secret {
            Some(secret) if !secret.is_empty() => Self::with_secret(secret.as_bytes()),
            _ => Self::unverified(),
        }
    }

    /// Whether signatures are checked.
    #[must_use]
    pub fn verifies_signature(&self) -> bool {
        self.verify_signature
    }
}

impl TokenDecoder for JwtDecoder {
    type Error = TokenError;

    fn decode(&self, token: &str) -> Result<Claims, Self::Error> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)?;
        Ok(data.claims)
    }
}

/// A validation that requires no registered claim and checks none.
fn claims_free_validation(alg: Algorithm) -> Validation {
    let mut validation = Validation::new(alg);
    validation.required_spec_claims = HashSet::new();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation
}
