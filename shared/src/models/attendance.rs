//! Attendance and Leave Models

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers::lenient_int;

/// Leave request (`leave_application` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LeaveApplication {
    pub id: i64,
    pub employee_username: Option<String>,
    pub applied_on: Option<NaiveDate>,
}

/// Daily presence mark (`mark_attendance` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AttendanceMark {
    pub id: i64,
    pub employee_username: Option<String>,
    pub attendance_date: Option<NaiveDate>,
}

/// Which record set an attendance view reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "Present")]
    Present,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::OnLeave => "On Leave",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status string other than `Present` or `On Leave`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid attendance status: {0:?}")]
pub struct InvalidStatus(pub String);

impl FromStr for AttendanceStatus {
    type Err = InvalidStatus;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(Self::Present),
            "On Leave" => Ok(Self::OnLeave),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

/// Query string of `GET /ViewAtt/{employeeUsername}`
///
/// `status` stays a raw string so an unknown value can be answered with
/// the API's own 400 body. A month or year that is missing, blank or not a
/// number is `None` and matches no rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceQuery {
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub month: Option<u32>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub year: Option<i32>,
}

/// Result of an attendance view, shaped by the requested status
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttendanceRecords {
    Leave(Vec<LeaveApplication>),
    Present(Vec<AttendanceMark>),
}

impl AttendanceRecords {
    pub fn len(&self) -> usize {
        match self {
            Self::Leave(rows) => rows.len(),
            Self::Present(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
