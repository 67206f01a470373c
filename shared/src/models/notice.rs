//! Notice Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::lenient_text;

/// Notice board entry (`notices` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Notice {
    pub id: i64,
    pub text: Option<String>,
    /// Set by the store on insert
    pub timestamp: Option<DateTime<Utc>>,
}

/// Create notice payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoticeCreate {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
}

/// An employee's acknowledgement of a notice (`notice_confirmations` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct NoticeConfirmation {
    pub employee_username: Option<String>,
    pub confirmed_at: Option<DateTime<Utc>>,
}
