//! Server configuration.

use std::{net::SocketAddr, path::PathBuf};

use crate::cli::Cli;
use crate::error::ServeError;

/// Configuration passed explicitly to the server at startup
///
/// Shared read-only across all request handlers; there is no other
/// cross-request state.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub bind: SocketAddr,
    /// Canonicalized root directory for static file serving
    pub static_root: PathBuf,
    /// Entry file name, resolved against the static root
    pub index_file: String,
    /// Backend URL printed in the banner; never contacted
    pub backend_url: String,
}

impl ServerConfig {
    /// Builds a configuration from CLI arguments, canonicalizing the
    /// static root so path checks are made against a stable base.
    pub fn from_cli(cli: Cli) -> Result<Self, ServeError> {
        let static_root = cli.root.canonicalize().map_err(|source| ServeError::Root {
            path: cli.root.clone(),
            source,
        })?;

        Ok(Self {
            bind: cli.bind,
            static_root,
            index_file: cli.index,
            backend_url: cli.backend_url,
        })
    }

    /// Full path of the entry file
    pub fn index_path(&self) -> PathBuf {
        self.static_root.join(&self.index_file)
    }
}
