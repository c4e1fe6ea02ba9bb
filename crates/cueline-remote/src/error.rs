//! Error types for the console transport
use thiserror::Error;

/// Transport errors
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Could not reach the console
    #[error("unable to connect to {host}:{port}: {source}")]
    Connect {
        /// Console host
        host: String,
        /// Telnet port
        port: u16,
        /// Underlying socket error
        source: std::io::Error,
    },

    /// Operation attempted before connect
    #[error("not connected, call connect() first")]
    NotConnected,

    /// I/O error on an established connection
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, RemoteError>;
