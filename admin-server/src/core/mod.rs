//! Core: configuration, shared state, server lifecycle

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, ConfigError, DatabaseConfig, LogConfig};
pub use error::ServerError;
pub use server::Server;
pub use state::AppState;
