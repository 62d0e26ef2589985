//! HTTP request handlers.
//!
//! Routing is two-stage: an exact asset lookup (`serve_static`) and an
//! unconditional SPA fallback (`serve_index`). Any path that does not
//! resolve to a real file under the static root is answered with the
//! entry file so a client-side router can take over.

use axum::{
    body::Body,
    extract::{Extension, State},
    http::{HeaderValue, StatusCode, Uri, header},
    response::Response,
};
use percent_encoding::percent_decode_str;
use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tokio::fs;
use tracing::{debug, error};

use crate::config::ServerConfig;

/// Normalizes a request path into a relative filesystem path
///
/// Percent-decodes the path first so encoded names on disk (spaces,
/// non-ASCII) resolve, then walks the decoded components and keeps
/// only normal segments; a `..`, root, or prefix component rejects
/// the whole path, so a request can never name anything outside the
/// static root. Decoding happens before the walk, so encoded dot
/// segments (`%2e%2e`) are rejected like literal ones.
fn sanitize_request_path(raw: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let mut clean = PathBuf::new();
    for component in Path::new(decoded.trim_start_matches('/')).components() {
        match component {
            Component::Normal(segment) => clean.push(segment),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(clean)
}

/// Resolves a request path to a candidate file under the root
///
/// Directory requests resolve to the directory's `index.html`, matching
/// what a browser expects from a static host.
fn resolve_asset(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut file_path = root.join(sanitize_request_path(request_path)?);
    if file_path.is_dir() {
        file_path.push("index.html");
    }
    Some(file_path)
}

/// Builds a 200 response with the given body and content type
fn file_response(content: Vec<u8>, mime_type: &str) -> Result<Response, StatusCode> {
    let mut response = Response::new(Body::from(content));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(mime_type).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?,
    );
    Ok(response)
}

/// Reads the entry file and serves it as `text/html`
///
/// A missing or unreadable entry file is a deployment problem, not a
/// routing miss, so it surfaces as a 500 rather than another fallback.
async fn index_response(config: &ServerConfig, id: &str) -> Result<Response, StatusCode> {
    let index_path = config.index_path();
    match fs::read(&index_path).await {
        Ok(content) => file_response(content, "text/html"),
        Err(e) => {
            error!("[{}] cannot read entry file {:?}: {}", id, index_path, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Serves the entry file for the root path
pub async fn serve_index(
    State(config): State<Arc<ServerConfig>>,
    Extension(id): Extension<String>,
) -> Result<Response, StatusCode> {
    index_response(&config, &id).await
}

/// Serves a static asset, falling back to the entry file
///
/// Implements the asset stage of the router:
/// - Sanitized lookup under the static root, `index.html` for directories
/// - MIME type detection from the file extension
/// - A missing asset is not an error: the entry file answers instead
/// - Any other read failure yields a 500, contained to this request
pub async fn serve_static(
    State(config): State<Arc<ServerConfig>>,
    Extension(id): Extension<String>,
    uri: Uri,
) -> Result<Response, StatusCode> {
    let Some(file_path) = resolve_asset(&config.static_root, uri.path()) else {
        debug!("[{}] rejected unsafe path {}, serving entry file", id, uri.path());
        return index_response(&config, &id).await;
    };

    match fs::read(&file_path).await {
        Ok(content) => {
            let mime_type = mime_guess::from_path(&file_path).first_or_octet_stream();
            debug!("[{}] asset {:?} ({})", id, file_path, mime_type);
            file_response(content, mime_type.as_ref())
        }
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            debug!("[{}] no asset for {}, serving entry file", id, uri.path());
            index_response(&config, &id).await
        }
        Err(e) => {
            error!("[{}] failed to read {:?}: {}", id, file_path, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
