//! HTTP server module.
//!
//! Serves the router over plain HTTP. TLS termination is left to the reverse
//! proxy or load balancer in front of the process.
//!
//! The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT with connection draining

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
