//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod equipment;
pub mod parks;
#[allow(clippy::missing_errors_doc)]
pub mod users;
#[allow(clippy::missing_errors_doc)]
pub mod validate;

use axum::Router;
use axum::routing::{delete, get, post, put};
use serde::Deserialize;

use barzmap_app::ports::{EquipmentRepository, TokenDecoder, UserRepository};

use crate::state::AppState;

/// `?id=` query string shared by the get and delete routes.
///
/// Kept as a raw string so a malformed id becomes a JSON validation error
/// instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Build the API router.
///
/// Collection paths are served both with and without the trailing slash.
pub fn routes<ER, UR, TD>() -> Router<AppState<ER, UR, TD>>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    TD: TokenDecoder + Send + Sync + 'static,
{
    Router::new()
        // Equipment
        .route("/equipment", get(equipment::get::<ER, UR, TD>))
        .route("/equipment/", get(equipment::get::<ER, UR, TD>))
        .route("/equipment/create", post(equipment::create::<ER, UR, TD>))
        .route("/equipment/update", put(equipment::update::<ER, UR, TD>))
        .route("/equipment/delete", delete(equipment::delete::<ER, UR, TD>))
        // Users
        .route("/user", get(users::get::<ER, UR, TD>))
        .route("/user/", get(users::get::<ER, UR, TD>))
        .route("/user/create", post(users::create::<ER, UR, TD>))
        .route("/user/update", put(users::update::<ER, UR, TD>))
        .route("/user/delete", delete(users::delete::<ER, UR, TD>))
        // Parks
        .route("/park", get(parks::not_implemented))
        .route("/park/", get(parks::not_implemented))
        .route("/park/create", post(parks::not_implemented))
        .route("/park/update", put(parks::not_implemented))
        .route("/park/delete", delete(parks::not_implemented))
        // Token validation
        .route("/validate", get(validate::validate::<ER, UR, TD>))
        .route("/validate/", get(validate::validate::<ER, UR, TD>))
}
