//! Router assembly and the bind/serve loop.

use axum::{Router, middleware::from_fn, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tracing::info;

use crate::banner;
use crate::config::ServerConfig;
use crate::error::ServeError;
use crate::handlers::{serve_index, serve_static};
use crate::middleware::log_requests;

/// Builds the two-stage router
///
/// Stage one is the exact root route answering with the entry file;
/// stage two is the fallback, which looks up a static asset and itself
/// falls through to the entry file when no asset matches.
pub fn router(config: Arc<ServerConfig>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .fallback(get(serve_static))
        .layer(CompressionLayer::new())
        .layer(from_fn(log_requests))
        .with_state(config)
}

/// Binds the listener and serves until the process is stopped
///
/// Bind failure (e.g. the port is already in use) is fatal and
/// propagates to the caller; per-request failures never reach here.
pub async fn run(config: ServerConfig) -> Result<(), ServeError> {
    let config = Arc::new(config);
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServeError::Bind {
            addr: config.bind,
            source,
        })?;

    banner::print_banner(&config);
    info!(
        "serving {} on http://{}",
        config.static_root.display(),
        config.bind
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}
