//! Request logging middleware.

use axum::{body::Body, http::Request, http::StatusCode, middleware::Next, response::Response};
use nanoid::nanoid;
use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};
use std::time::Instant;
use tracing::info;

/// Colors a status code by its class
///
/// 2xx green, 3xx cyan, 4xx yellow, anything else red. Gracefully
/// degrades to plain text when output isn't a terminal.
pub fn colored_status(status: StatusCode) -> String {
    let color = match status.as_u16() {
        200..=299 => AnsiColors::Green,
        300..=399 => AnsiColors::Cyan,
        400..=499 => AnsiColors::Yellow,
        _ => AnsiColors::Red,
    };
    let style = Style::new().color(DynColors::Ansi(color));
    status.to_string().style(style).to_string()
}

/// Middleware that logs each request and its outcome
///
/// This middleware:
/// 1. Generates a short nanoid for each request
/// 2. Stores the ID in request extensions for handler-side log lines
/// 3. Logs the request line, runs the rest of the stack, then logs the
///    response status (colored by class) with the measured latency
pub async fn log_requests(mut req: Request<Body>, next: Next) -> Response {
    let id = nanoid!(5);
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    req.extensions_mut().insert(id.clone());

    info!("[{}] → {} {}", id, method, path);
    let response = next.run(req).await;

    info!(
        "[{}] ← {} {} ({}ms)",
        id,
        colored_status(response.status()),
        path,
        start.elapsed().as_millis()
    );
    response
}
