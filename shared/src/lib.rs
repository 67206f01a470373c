//! Shared types for the cb-admin backend
//!
//! Row and payload models exchanged over the HTTP API. Row types derive
//! `sqlx::FromRow` when the `db` feature is enabled so the server can decode
//! them straight out of the store.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
