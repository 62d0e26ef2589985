//! Command-line interface configuration.

use argh::FromArgs;
use std::{net::SocketAddr, path::PathBuf};

/// A development front-end server with SPA fallback
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// path to the static files directory (default: '.')
    #[argh(option, default = "PathBuf::from(\".\")")]
    pub root: PathBuf,

    /// entry file served for unmatched routes (default: 'index.html')
    #[argh(option, default = "String::from(\"index.html\")")]
    pub index: String,

    /// server bind address (default: '127.0.0.1:3000')
    #[argh(option, default = "\"127.0.0.1:3000\".parse().unwrap()")]
    pub bind: SocketAddr,

    /// backend URL shown in the startup banner (default: 'http://localhost:5000')
    #[argh(option, long = "backend-url", default = "String::from(\"http://localhost:5000\")")]
    pub backend_url: String,
}
