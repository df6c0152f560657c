//! Server core: configuration, shared state, HTTP server

mod config;
mod server;
mod state;

pub use config::Config;
pub use server::{Server, ServerError, build_router};
pub use state::ServerState;

/// Result type for server startup/runtime failures
pub type Result<T> = std::result::Result<T, ServerError>;
