//! Data models
//!
//! Shared between admin-server and any API consumer.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Field names are the column names, which are also the JSON field names.
//! Columns the store may leave NULL are `Option`.

pub mod attendance;
pub mod employee;
pub mod holiday;
pub mod notice;
pub mod salary;
pub mod site;

pub mod serde_helpers;

mod required;

// Re-exports
pub use attendance::*;
pub use employee::*;
pub use holiday::*;
pub use notice::*;
pub use required::MissingFields;
pub use salary::*;
pub use site::*;
