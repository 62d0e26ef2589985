//! Front-rs library - Development front-end server with SPA fallback.

pub mod banner;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
