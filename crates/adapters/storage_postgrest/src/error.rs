//! Remote-store error type wrapping reqwest errors and PostgREST rejections.

use barzmap_domain::error::{BarzError, StoreError};

/// Errors originating from the PostgREST storage layer.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The request never got an answer, or the answer could not be decoded.
    #[error("remote store request failed")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("remote store answered {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The adapter configuration is unusable.
    #[error("invalid remote store configuration: {0}")]
    Config(&'static str),
}

impl RestError {
    /// Build a [`RestError::Rejected`] from a PostgREST error body.
    ///
    /// PostgREST answers `{"code", "message", "details", "hint"}`; the
    /// `message` is kept when present, the raw body otherwise, and a generic
    /// status line when the body is empty or could not be read.
    pub(crate) fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        let message = if message.is_empty() {
            format!("remote store answered {status}")
        } else {
            message
        };
        Self::Rejected { status, message }
    }
}

impl From<RestError> for BarzError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Rejected { status, message } => {
                Self::Store(StoreError::rejected(status, message))
            }
            other => Self::Store(StoreError::unavailable("remote store unavailable", other)),
        }
    }
}
