//! JSON REST handlers for equipment.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use barzmap_app::ports::{EquipmentRepository, TokenDecoder, UserRepository};
use barzmap_domain::equipment::{Equipment, EquipmentPatch, NewEquipment};
use barzmap_domain::error::ValidationError;
use barzmap_domain::id::EquipmentId;

use super::IdQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating equipment.
#[derive(Deserialize)]
pub struct CreateEquipmentRequest {
    pub name: String,
    pub description: String,
    pub icon_name: String,
}

/// Request body for updating equipment. Absent fields are left untouched.
#[derive(Deserialize)]
pub struct UpdateEquipmentRequest {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon_name: Option<String>,
}

/// Possible responses from the get, update and delete endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Equipment>>),
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
    Created(Json<Vec<Equipment>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /equipment/?id=<uuid>`
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
        .map(|value| EquipmentId::parse_field("id", value))
        .transpose()?;
    let rows = state.equipment_service.get_equipment(id).await?;
    Ok(ListResponse::Ok(Json(rows)))
}

/// `POST /equipment/create`
pub async fn create<ER, UR, TD>(
    State(state): State<AppState<ER, UR, TD>>,
    req: Result<Json<CreateEquipmentRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    TD: TokenDecoder + Send + Sync + 'static,
{
    let Json(req) = req?;
    let equipment = NewEquipment {
        name: req.name,
        description: req.description,
        icon_name: req.icon_name,
    };
    let created = state.equipment_service.create_equipment(equipment).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /equipment/update`
pub async fn update<ER, UR, TD>(
    State(state): State<AppState<ER, UR, TD>>,
    req: Result<Json<UpdateEquipmentRequest>, JsonRejection>,
) -> Result<ListResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    TD: TokenDecoder + Send + Sync + 'static,
{
    let Json(req) = req?;
    let patch = EquipmentPatch {
        id: EquipmentId::parse_field("id", &req.id)?,
        name: req.name,
        description: req.description,
        icon_name: req.icon_name,
    };
    let updated = state.equipment_service.update_equipment(patch).await?;
    Ok(ListResponse::Ok(Json(updated)))
}

/// `DELETE /equipment/delete?id=<uuid>`
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
    let id = EquipmentId::parse_field("id", &raw)?;
    let deleted = state.equipment_service.delete_equipment(id).await?;
    Ok(ListResponse::Ok(Json(deleted)))
}
