//! Error types for front-rs.
//!
//! Only startup errors are represented here; per-request failures are
//! contained to their response as a `StatusCode`.

use std::{io, net::SocketAddr, path::PathBuf};
use thiserror::Error;

/// Fatal startup errors. Any of these terminates the process with a
/// non-zero exit code.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The configured port could not be bound (e.g. already in use)
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The static root directory could not be resolved
    #[error("failed to resolve static root {path:?}: {source}")]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The accept loop failed after startup
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
