//! Holiday Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers::lenient_text;

/// Company holiday (`holidays` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Holiday {
    pub id: i64,
    pub holiday_name: Option<String>,
    pub holiday_date: Option<NaiveDate>,
}

/// Create holiday payload
///
/// Nothing is required here; nulls go through to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayCreate {
    #[serde(default, deserialize_with = "lenient_text")]
    pub holiday_name: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient_text")]
    pub holiday_date: Option<String>,
}
