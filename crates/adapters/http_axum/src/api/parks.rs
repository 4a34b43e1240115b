//! Park routes. The park resource has no contract yet, so every route
//! answers `501 Not Implemented`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::ErrorBody;

/// Handler shared by every `/park` route.
pub async fn not_implemented() -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(ErrorBody {
            error: "park endpoints are not implemented".to_string(),
        }),
    )
        .into_response()
}
