//! Admin backend for employee, site, holiday, notice, attendance and salary records
//!
//! # Module layout
//!
//! ```text
//! admin-server/src/
//! ├── core/      # configuration, state, server lifecycle
//! ├── auth/      # session tokens
//! ├── api/       # HTTP handlers, one module per resource
//! ├── routes/    # router assembly and middleware
//! ├── common/    # errors and logging
//! └── db/        # MySQL data access behind repository traits
//! ```

pub mod api;
pub mod auth;
pub mod common;
pub mod core;
pub mod db;
pub mod routes;

pub use auth::{SessionClaims, SessionTokens};
pub use common::{AppError, AppResult};
pub use core::{AppState, Config, Server, ServerError};
pub use db::{MySqlStore, Store, StoreError, StoreResult};
pub use routes::{build_app, build_router};

pub use common::logger::init_logger;
