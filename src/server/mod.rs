//! Static server for the built client.
//!
//! Files in the dist directory are served as they are. Every other GET gets
//! `index.html` so deep links keep working under browser history: status
//! 200 when a client route declares the path, 404 otherwise.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    handler::Handler,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::app::Page;
use crate::config::ServerConfig;
use crate::routing::RouteTable;
use crate::shared::errors::ServerError;
use crate::shared::logging::log_history_fallback;

#[derive(Clone)]
pub struct SpaState {
    index_html: PathBuf,
    routes: Arc<RouteTable<Page>>,
}

/// Builds the HTTP router serving `dist_dir`.
pub fn spa_router(dist_dir: &Path, routes: RouteTable<Page>) -> Result<Router, ServerError> {
    if !dist_dir.is_dir() {
        return Err(ServerError::DistNotFound(dist_dir.display().to_string()));
    }

    let state = SpaState {
        index_html: dist_dir.join("index.html"),
        routes: Arc::new(routes),
    };

    let assets = ServeDir::new(dist_dir)
        .append_index_html_on_directories(false)
        .fallback(history_fallback.with_state(state));

    Ok(Router::new()
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http()))
}

/// Binds `config.addr` and serves until Ctrl+C.
pub async fn serve(config: &ServerConfig, routes: RouteTable<Page>) -> Result<(), ServerError> {
    let app = spa_router(&config.dist_dir, routes)?;
    let listener = TcpListener::bind(config.addr).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        dist_dir = %config.dist_dir.display(),
        "SPA server starting"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("SPA server stopped");
    Ok(())
}

async fn history_fallback(State(state): State<SpaState>, uri: Uri) -> Response {
    let path = uri.path();

    if looks_like_asset(path) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let matched = state.routes.resolve(path).is_some();
    log_history_fallback(path, matched);

    match tokio::fs::read_to_string(&state.index_html).await {
        Ok(html) => {
            let status = if matched { StatusCode::OK } else { StatusCode::NOT_FOUND };
            (status, Html(html)).into_response()
        }
        Err(e) => {
            tracing::error!(
                index = %state.index_html.display(),
                error = %e,
                "Failed to read index.html"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "index.html unavailable").into_response()
        }
    }
}

/// A missing `/app.wasm` should not be answered with the HTML shell.
fn looks_like_asset(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
