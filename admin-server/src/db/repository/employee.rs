//! Employee database operations

use async_trait::async_trait;
use shared::models::{Employee, EmployeeUpdate, NewEmployee};

use crate::db::{MySqlStore, StoreResult};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_employee(&self, employee_id: i64) -> StoreResult<Option<Employee>>;

    async fn list_employees(&self) -> StoreResult<Vec<Employee>>;

    async fn create_employee(&self, data: &NewEmployee) -> StoreResult<()>;

    /// Overwrite every column of the row, NULL for absent fields
    async fn update_employee(&self, employee_id: i64, data: &EmployeeUpdate) -> StoreResult<()>;

    /// Deleting a missing id is not an error
    async fn delete_employee(&self, employee_id: i64) -> StoreResult<()>;

    /// First employee whose stored email and plaintext password both match
    async fn find_by_credentials(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> StoreResult<Option<Employee>>;
}

#[async_trait]
impl EmployeeRepository for MySqlStore {
    async fn find_employee(&self, employee_id: i64) -> StoreResult<Option<Employee>> {
        let employee: Option<Employee> = sqlx::query_as(
            r#"
            SELECT employee_id, employee_username, employee_name, employee_address,
                   date_of_birth, mobile_no, email_address, password, designation,
                   currency_symbol, current_salary, salary_type,
                   working_hours_from, working_hours_to
            FROM employee
            WHERE employee_id = ?
            "#,
        )
        .bind(employee_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(employee)
    }

    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let employees: Vec<Employee> = sqlx::query_as(
            r#"
            SELECT employee_id, employee_username, employee_name, employee_address,
                   date_of_birth, mobile_no, email_address, password, designation,
                   currency_symbol, current_salary, salary_type,
                   working_hours_from, working_hours_to
            FROM employee
            "#,
        )
        .fetch_all(self.pool())
        .await?;
        Ok(employees)
    }

    async fn create_employee(&self, data: &NewEmployee) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employee (
                employee_username, employee_name, employee_address, date_of_birth,
                mobile_no, email_address, password, designation, currency_symbol,
                current_salary, salary_type, working_hours_from, working_hours_to
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.employee_username)
        .bind(&data.employee_name)
        .bind(&data.employee_address)
        .bind(&data.date_of_birth)
        .bind(&data.mobile_no)
        .bind(&data.email_address)
        .bind(&data.password)
        .bind(&data.designation)
        .bind(&data.currency_symbol)
        .bind(&data.current_salary)
        .bind(&data.salary_type)
        .bind(&data.working_hours_from)
        .bind(&data.working_hours_to)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn update_employee(&self, employee_id: i64, data: &EmployeeUpdate) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE employee SET
                employee_name = ?,
                employee_username = ?,
                employee_address = ?,
                date_of_birth = ?,
                mobile_no = ?,
                email_address = ?,
                password = ?,
                designation = ?,
                currency_symbol = ?,
                salary_type = ?,
                current_salary = ?,
                working_hours_from = ?,
                working_hours_to = ?
            WHERE employee_id = ?
            "#,
        )
        .bind(&data.employee_name)
        .bind(&data.employee_username)
        .bind(&data.employee_address)
        .bind(&data.date_of_birth)
        .bind(&data.mobile_no)
        .bind(&data.email_address)
        .bind(&data.password)
        .bind(&data.designation)
        .bind(&data.currency_symbol)
        .bind(&data.salary_type)
        .bind(&data.current_salary)
        .bind(&data.working_hours_from)
        .bind(&data.working_hours_to)
        .bind(employee_id)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn delete_employee(&self, employee_id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM employee WHERE employee_id = ?")
            .bind(employee_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn find_by_credentials(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> StoreResult<Option<Employee>> {
        let employee: Option<Employee> = sqlx::query_as(
            r#"
            SELECT employee_id, employee_username, employee_name, employee_address,
                   date_of_birth, mobile_no, email_address, password, designation,
                   currency_symbol, current_salary, salary_type,
                   working_hours_from, working_hours_to
            FROM employee
            WHERE email_address = ? AND password = ?
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(self.pool())
        .await?;
        Ok(employee)
    }
}
