//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use barzmap_domain::error::{BarzError, ValidationError};

/// JSON error body returned by every endpoint, extractor rejections included.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Maps [`BarzError`] and extractor rejections to an HTTP response with
/// appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    Domain(BarzError),
    /// The request body or query string could not be extracted.
    Rejected { status: StatusCode, message: String },
}

impl From<BarzError> for ApiError {
    fn from(err: BarzError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Domain(err) => err,
            Self::Rejected { status, message } => {
                tracing::debug!(status = status.as_u16(), %message, "request rejected");
                return (status, Json(ErrorBody { error: message })).into_response();
            }
        };
        let (status, message) = match &err {
            BarzError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            BarzError::Unauthorized(err) => {
                let mut response = (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorBody {
                        error: err.to_string(),
                    }),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                return response;
            }
            BarzError::Store(err) => match err.status.and_then(|s| StatusCode::from_u16(s).ok()) {
                Some(status) if status.is_client_error() || status.is_server_error() => {
                    if status.is_server_error() {
                        tracing::error!(status = status.as_u16(), error = %err, "remote store failed");
                    } else {
                        tracing::warn!(status = status.as_u16(), error = %err, "remote store rejected request");
                    }
                    (status, err.message.clone())
                }
                _ => {
                    tracing::error!(error = %err, source = ?std::error::Error::source(err), "remote store unavailable");
                    (StatusCode::BAD_GATEWAY, "remote store unavailable".to_string())
                }
            },
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
