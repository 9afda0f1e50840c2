//! Router assembly and the HTTP server loop.

use anyhow::Context;
use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use casetrack_config::CasetrackConfig;
use casetrack_db::service::CaseService;

use crate::routes;
use crate::state::AppState;

/// CORS for the configured origins. No origins means any origin.
///
/// # Errors
///
/// Returns an error if an origin is not a valid header value.
pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid CORS origin '{origin}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any))
}

/// Full application router with tracing and CORS layers applied.
///
/// # Errors
///
/// Returns an error if the CORS configuration is invalid.
pub fn build_router(state: AppState, cors_origins: &[String]) -> anyhow::Result<Router> {
    Ok(routes::router()
        .layer(cors_layer(cors_origins)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Open the store, bind, and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the address cannot be
/// bound, or the server fails.
pub async fn serve(config: &CasetrackConfig) -> anyhow::Result<()> {
    let service = CaseService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database at '{}'", config.database.path))?;
    let state = AppState::from_config(service, config);
    let router = build_router(state, &config.server.cors_origins)?;

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        %addr,
        database = %config.database.path,
        update_policy = %config.general.update_policy,
        "casetrack listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("casetrack stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
