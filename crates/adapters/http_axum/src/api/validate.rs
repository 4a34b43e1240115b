//! Bearer token validation endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};

use barzmap_app::ports::{EquipmentRepository, TokenDecoder, UserRepository};
use barzmap_domain::error::{AuthError, BarzError};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /validate/`
///
/// Answers `true` when the bearer token decodes. A missing or malformed
/// `Authorization` header and an undecodable token are all a 401.
pub async fn validate<ER, UR, TD>(
    State(state): State<AppState<ER, UR, TD>>,
    headers: HeaderMap,
) -> Result<Json<bool>, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    TD: TokenDecoder + Send + Sync + 'static,
{
    let header = headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| AuthError::MalformedHeader))
        .transpose()
        .map_err(BarzError::from)?;
    let valid = state.auth_service.validate(header)?;
    Ok(Json(valid))
}
