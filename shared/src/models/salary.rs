//! Salary Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers::{lenient_amount, lenient_text};

/// Salary breakdown for one employee (`salary_details` table)
///
/// `employee_username` is the unique key; writes upsert on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SalaryDetail {
    pub employee_username: String,
    pub total_salary: Option<Decimal>,
    pub advance_taken_amount: Option<Decimal>,
    pub advance_taken_date: Option<NaiveDate>,
    pub bonus_amount: Option<Decimal>,
    pub bonus_date: Option<NaiveDate>,
    pub final_salary: Option<Decimal>,
    pub advance_reason: Option<String>,
    pub bonus_reason: Option<String>,
}

/// Confirmed salary (`confirm_salary` table), same shape as [`SalaryDetail`]
pub type ConfirmedSalary = SalaryDetail;

/// Salary upsert payload; the username comes from the path
///
/// Nothing is validated. Amounts and dates are passed to the store as text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryUpdate {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub advance_taken_amount: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient_text")]
    pub advance_taken_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub bonus_amount: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient_text")]
    pub bonus_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub final_salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub advance_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub bonus_reason: Option<String>,
}
