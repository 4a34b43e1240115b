//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use barzmap_app::ports::{EquipmentRepository, TokenDecoder, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<ER, UR, TD>(state: AppState<ER, UR, TD>) -> Router
where
    ER: EquipmentRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    TD: TokenDecoder + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
