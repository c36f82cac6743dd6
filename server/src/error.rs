//! Server startup errors.

use std::net::SocketAddr;

/// Everything that can stop the server from coming up or staying up.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// The cargo-leptos metadata or `LEPTOS_*` environment is missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
