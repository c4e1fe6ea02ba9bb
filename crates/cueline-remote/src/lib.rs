//! Cueline Remote - Console Transport
//!
//! Line-oriented telnet transport for grandMA2-style consoles. The command
//! strings come from `cueline-cmd`; this crate only opens the connection,
//! logs in, and ships CRLF-terminated lines. It is the single component in
//! the workspace allowed to touch the socket.
//!
//! No retries, no pipelining: one connection, sequential commands, a fixed
//! processing delay after each. That matches how the console's telnet
//! interface behaves in practice.

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;

pub use client::ConsoleClient;
pub use config::{RemoteConfig, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_USER};
pub use error::{RemoteError, Result};
