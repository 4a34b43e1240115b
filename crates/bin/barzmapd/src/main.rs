//! # barzmapd — barzmap daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Build the PostgREST client once and hand it to both repositories
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use barzmap_adapter_auth_jwt::JwtDecoder;
use barzmap_adapter_http_axum::state::AppState;
use barzmap_adapter_storage_postgrest::{
    PostgrestEquipmentRepository, PostgrestUserRepository,
};
use barzmap_app::services::auth_service::AuthService;
use barzmap_app::services::equipment_service::EquipmentService;
use barzmap_app::services::user_service::UserService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter).context("invalid logging filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Remote store
    let client = barzmap_adapter_storage_postgrest::Config {
        url: config.store.url.clone(),
        secret_key: config.store.secret_key.clone(),
        timeout: config.store_timeout(),
    }
    .build()
    .context("failed to build remote store client")?;

    // Repositories
    let equipment_repo = PostgrestEquipmentRepository::new(client.clone());
    let user_repo = PostgrestUserRepository::new(client);

    // Token decoding
    let decoder = JwtDecoder::from_optional_secret(config.auth.jwt_secret.as_deref());
    if !decoder.verifies_signature() {
        tracing::warn!("no JWT secret configured, token signatures are not verified");
    }

    // Services
    let state = AppState::new(
        EquipmentService::new(equipment_repo),
        UserService::new(user_repo),
        AuthService::new(decoder),
    );
    let app = barzmap_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, store = %config.store.url, "barzmapd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("barzmapd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
