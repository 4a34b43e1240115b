//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`BarzError`]
//! via `#[from]` or an explicit `From` impl.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum BarzError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("unauthorized")]
    Unauthorized(#[from] AuthError),

    #[error("remote store error")]
    Store(#[from] StoreError),
}

/// A payload or identifier failed boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("{field} is not a valid UUID: {value:?}")]
    InvalidId { field: &'static str, value: String },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email address is malformed")]
    InvalidEmail,

    #[error("update carries no field to change")]
    EmptyPatch,
}

/// The request did not carry a usable bearer token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingHeader,

    #[error("authorization header is not a bearer token")]
    MalformedHeader,

    #[error("bearer token could not be decoded")]
    InvalidToken,
}

/// A call to the remote store failed.
///
/// `status` carries the HTTP status the store answered with, when it
/// answered at all. It is `None` for transport failures and undecodable
/// responses.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub status: Option<u16>,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// The store answered with a non-success status.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
            source: None,
        }
    }

    /// The store could not be reached or its answer could not be read.
    #[must_use]
    pub fn unavailable(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            status: None,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_barz_error() {
        let err: BarzError = ValidationError::EmptyPatch.into();
        assert!(matches!(
            err,
            BarzError::Validation(ValidationError::EmptyPatch)
        ));
    }

    #[test]
    fn should_display_invalid_id_with_field_and_value() {
        let err = ValidationError::InvalidId {
            field: "id",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "id is not a valid UUID: \"abc\"");
    }

    #[test]
    fn should_keep_status_when_store_rejects() {
        let err = StoreError::rejected(409, "duplicate key");
        assert_eq!(err.status, Some(409));
        assert_eq!(err.to_string(), "duplicate key");
    }

    #[test]
    fn should_keep_source_when_store_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StoreError::unavailable("remote store unreachable", io);
        assert!(err.status.is_none());
        assert!(std::error::Error::source(&err).is_some());
    }
}
