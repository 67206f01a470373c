//! HTTP API
//!
//! One module per resource, each exposing a `router()` merged by
//! [`crate::routes::build_router`].
//!
//! - [`auth`] - login and session token issuance
//! - [`employees`] - employee records
//! - [`sites`] - work sites
//! - [`holidays`] - company holidays
//! - [`notices`] - notice board and confirmations
//! - [`attendance`] - leave applications and attendance views
//! - [`salary`] - salary details and confirmed salaries

pub mod extract;

pub mod attendance;
pub mod auth;
pub mod employees;
pub mod holidays;
pub mod notices;
pub mod salary;
pub mod sites;

pub use extract::{Payload, RowId};
