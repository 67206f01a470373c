//! Salary database operations

use async_trait::async_trait;
use shared::models::{ConfirmedSalary, SalaryDetail, SalaryUpdate};

use crate::db::{MySqlStore, StoreResult};

#[async_trait]
pub trait SalaryRepository: Send + Sync {
    /// Insert the row for `username`, or overwrite it in place if one exists
    async fn upsert_salary(&self, username: &str, data: &SalaryUpdate) -> StoreResult<()>;

    async fn salary_details(&self, username: &str) -> StoreResult<Vec<SalaryDetail>>;

    async fn confirmed_salary(&self, username: &str) -> StoreResult<Vec<ConfirmedSalary>>;
}

#[async_trait]
impl SalaryRepository for MySqlStore {
    async fn upsert_salary(&self, username: &str, data: &SalaryUpdate) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO salary_details (
                employee_username, total_salary, advance_taken_amount, advance_taken_date,
                bonus_amount, bonus_date, final_salary, advance_reason, bonus_reason
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                total_salary = VALUES(total_salary),
                advance_taken_amount = VALUES(advance_taken_amount),
                advance_taken_date = VALUES(advance_taken_date),
                bonus_amount = VALUES(bonus_amount),
                bonus_date = VALUES(bonus_date),
                final_salary = VALUES(final_salary),
                advance_reason = VALUES(advance_reason),
                bonus_reason = VALUES(bonus_reason)
            "#,
        )
        .bind(username)
        .bind(&data.total_salary)
        .bind(&data.advance_taken_amount)
        .bind(&data.advance_taken_date)
        .bind(&data.bonus_amount)
        .bind(&data.bonus_date)
        .bind(&data.final_salary)
        .bind(&data.advance_reason)
        .bind(&data.bonus_reason)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn salary_details(&self, username: &str) -> StoreResult<Vec<SalaryDetail>> {
        let rows: Vec<SalaryDetail> = sqlx::query_as(
            r#"
            SELECT employee_username, total_salary, advance_taken_amount, advance_taken_date,
                   bonus_amount, bonus_date, final_salary, advance_reason, bonus_reason
            FROM salary_details
            WHERE employee_username = ?
            "#,
        )
        .bind(username)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    async fn confirmed_salary(&self, username: &str) -> StoreResult<Vec<ConfirmedSalary>> {
        let rows: Vec<ConfirmedSalary> = sqlx::query_as(
            r#"
            SELECT employee_username, total_salary, advance_taken_amount, advance_taken_date,
                   bonus_amount, bonus_date, final_salary, advance_reason, bonus_reason
            FROM confirm_salary
            WHERE employee_username = ?
            "#,
        )
        .bind(username)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }
}
