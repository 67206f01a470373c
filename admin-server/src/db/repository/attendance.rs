//! Attendance and leave database operations

use async_trait::async_trait;
use shared::models::{AttendanceMark, LeaveApplication};

use crate::db::{MySqlStore, StoreResult};

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn list_leave_applications(&self) -> StoreResult<Vec<LeaveApplication>>;

    /// Leave applied for by `username` in the given calendar month.
    /// A `None` month or year matches nothing.
    async fn leave_in_month(
        &self,
        username: &str,
        month: Option<u32>,
        year: Option<i32>,
    ) -> StoreResult<Vec<LeaveApplication>>;

    /// Attendance marked by `username` in the given calendar month.
    /// A `None` month or year matches nothing.
    async fn attendance_in_month(
        &self,
        username: &str,
        month: Option<u32>,
        year: Option<i32>,
    ) -> StoreResult<Vec<AttendanceMark>>;
}

#[async_trait]
impl AttendanceRepository for MySqlStore {
    async fn list_leave_applications(&self) -> StoreResult<Vec<LeaveApplication>> {
        let rows: Vec<LeaveApplication> =
            sqlx::query_as("SELECT id, employee_username, applied_on FROM leave_application")
                .fetch_all(self.pool())
                .await?;
        Ok(rows)
    }

    async fn leave_in_month(
        &self,
        username: &str,
        month: Option<u32>,
        year: Option<i32>,
    ) -> StoreResult<Vec<LeaveApplication>> {
        let rows: Vec<LeaveApplication> = sqlx::query_as(
            r#"
            SELECT id, employee_username, applied_on
            FROM leave_application
            WHERE employee_username = ?
              AND MONTH(applied_on) = ?
              AND YEAR(applied_on) = ?
            "#,
        )
        .bind(username)
        .bind(month)
        .bind(year)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    async fn attendance_in_month(
        &self,
        username: &str,
        month: Option<u32>,
        year: Option<i32>,
    ) -> StoreResult<Vec<AttendanceMark>> {
        let rows: Vec<AttendanceMark> = sqlx::query_as(
            r#"
            SELECT id, employee_username, attendance_date
            FROM mark_attendance
            WHERE employee_username = ?
              AND MONTH(attendance_date) = ?
              AND YEAR(attendance_date) = ?
            "#,
        )
        .bind(username)
        .bind(month)
        .bind(year)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }
}
