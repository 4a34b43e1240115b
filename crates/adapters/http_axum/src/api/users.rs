//! JSON REST handlers for users.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use barzmap_app::ports::{EquipmentRepository, TokenDecoder, UserRepository};
use barzmap_domain::error::ValidationError;
use barzmap_domain::id::UserId;
use barzmap_domain::user::{NewUser, User, UserPatch};

use super::IdQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a user.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub auth0_id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Request body for updating a user. Absent fields are left untouched.
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub id: String,
    pub auth0_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Possible responses from the get, update and delete endpoints.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Vec<User>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /user/?id=<uuid>`
pub async fn get<ER, UR, TD>(
    State(state): State<AppState<ER, UR, TD>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    TD: TokenDecoder + Send + Sync + 'static,
{
    let Query(query) = query?;
    let id = query
        .id
        .as_deref()
        .map(|value| UserId::parse_field("id", value))
        .transpose()?;
    let rows = state.user_service.get_users(id).await?;
    Ok(ListResponse::Ok(Json(rows)))
}

/// `POST /user/create`
pub async fn create<ER, UR, TD>(
    State(state): State<AppState<ER, UR, TD>>,
    req: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    TD: TokenDecoder + Send + Sync + 'static,
{
    let Json(req) = req?;
    let user = NewUser {
        auth0_id: req.auth0_id,
        email: req.email,
        name: req.name,
        role: req.role,
    };
    let created = state.user_service.create_user(user).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /user/update`
pub async fn update<ER, UR, TD>(
    State(state): State<AppState<ER, UR, TD>>,
    req: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<ListResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    TD: TokenDecoder + Send + Sync + 'static,
{
    let Json(req) = req?;
    let patch = UserPatch {
        id: UserId::parse_field("id", &req.id)?,
        auth0_id: req.auth0_id,
        email: req.email,
        name: req.name,
        role: req.role,
    };
    let updated = state.user_service.update_user(patch).await?;
    Ok(ListResponse::Ok(Json(updated)))
}

/// `DELETE /user/delete?id=<uuid>`
pub async fn delete<ER, UR, TD>(
    State(state): State<AppState<ER, UR, TD>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    TD: TokenDecoder + Send + Sync + 'static,
{
    let Query(query) = query?;
    let raw = query.id.ok_or(ValidationError::MissingField("id"))?;
    let id = UserId::parse_field("id", &raw)?;
    let deleted = state.user_service.delete_user(id).await?;
    Ok(ListResponse::Ok(Json(deleted)))
}
