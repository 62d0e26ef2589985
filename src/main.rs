//! A small development front-end server.
//!
//! Serves static assets from a directory and answers every unmatched
//! route with a single HTML entry file, so a client-side router can
//! handle navigation. The real API lives in a separate backend process
//! that this server only mentions in its startup banner.

use tracing::{Level, error};

use front_rs::{cli::Cli, config::ServerConfig, server};

#[tokio::main]
async fn main() {
    // Initialize structured logging with INFO level as default
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli: Cli = argh::from_env();
    let config = match ServerConfig::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
