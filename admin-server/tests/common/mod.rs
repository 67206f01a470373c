//! Shared harness for the HTTP tests: an in-memory store and request helpers

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use admin_server::db::{
    AttendanceRepository, EmployeeRepository, HolidayRepository, NoticeRepository,
    SalaryRepository, SiteRepository,
};
use admin_server::{AppState, SessionTokens, Store, StoreError, StoreResult, build_app};
use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use shared::models::{
    AttendanceMark, ConfirmedSalary, Employee, EmployeeUpdate, Holiday, HolidayCreate,
    LeaveApplication, NewEmployee, NewSite, Notice, NoticeConfirmation, NoticeCreate,
    SalaryDetail, SalaryUpdate, Site,
};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    sites: Vec<Site>,
    holidays: Vec<Holiday>,
    notices: Vec<Notice>,
    confirmations: Vec<(i64, NoticeConfirmation)>,
    leave: Vec<LeaveApplication>,
    attendance: Vec<AttendanceMark>,
    salary: Vec<SalaryDetail>,
    confirmed_salary: Vec<ConfirmedSalary>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Store double with MySQL-like semantics for the statements the API issues
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failure: Mutex<Option<String>>,
    /// Number of write operations that reached the store
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every following operation fail with `message`
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    pub fn employee_count(&self) -> usize {
        self.tables.lock().unwrap().employees.len()
    }

    pub fn salary_rows(&self, username: &str) -> usize {
        self.tables
            .lock()
            .unwrap()
            .salary
            .iter()
            .filter(|row| row.employee_username == username)
            .count()
    }

    pub fn seed_leave(&self, username: &str, applied_on: NaiveDate) {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        tables.leave.push(LeaveApplication {
            id,
            employee_username: Some(username.to_string()),
            applied_on: Some(applied_on),
        });
    }

    pub fn seed_attendance(&self, username: &str, date: NaiveDate) {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        tables.attendance.push(AttendanceMark {
            id,
            employee_username: Some(username.to_string()),
            attendance_date: Some(date),
        });
    }

    pub fn seed_confirmation(&self, notice_id: i64, username: &str) {
        self.tables.lock().unwrap().confirmations.push((
            notice_id,
            NoticeConfirmation {
                employee_username: Some(username.to_string()),
                confirmed_at: Some(Utc::now()),
            },
        ));
    }

    pub fn seed_confirmed_salary(&self, row: ConfirmedSalary) {
        self.tables.lock().unwrap().confirmed_salary.push(row);
    }

    fn check(&self) -> StoreResult<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::Backend(message.clone())),
            None => Ok(()),
        }
    }

    fn write(&self) -> StoreResult<std::sync::MutexGuard<'_, Tables>> {
        self.check()?;
        *self.writes.lock().unwrap() += 1;
        Ok(self.tables.lock().unwrap())
    }

    fn read(&self) -> StoreResult<std::sync::MutexGuard<'_, Tables>> {
        self.check()?;
        Ok(self.tables.lock().unwrap())
    }
}

fn date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
}

fn time(value: Option<&str>) -> Option<NaiveTime> {
    value.and_then(|v| {
        NaiveTime::parse_from_str(v, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(v, "%H:%M"))
            .ok()
    })
}

/// DECIMAL column write under strict mode: non-numeric text fails the statement
fn decimal(column: &str, value: Option<&str>) -> StoreResult<Option<Decimal>> {
    value
        .map(|v| {
            v.trim().parse::<Decimal>().map_err(|_| {
                StoreError::Backend(format!(
                    "Incorrect decimal value: '{v}' for column '{column}' at row 1"
                ))
            })
        })
        .transpose()
}

fn in_month(day: Option<NaiveDate>, month: Option<u32>, year: Option<i32>) -> bool {
    match (day, month, year) {
        (Some(day), Some(month), Some(year)) => day.month() == month && day.year() == year,
        _ => false,
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn find_employee(&self, employee_id: i64) -> StoreResult<Option<Employee>> {
        let tables = self.read()?;
        Ok(tables
            .employees
            .iter()
            .find(|e| e.employee_id == employee_id)
            .cloned())
    }

    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.read()?.employees.clone())
    }

    async fn create_employee(&self, data: &NewEmployee) -> StoreResult<()> {
        let mut tables = self.write()?;
        let current_salary = decimal("current_salary", Some(&data.current_salary))?;
        let employee_id = tables.next_id();
        tables.employees.push(Employee {
            employee_id,
            employee_username: Some(data.employee_username.clone()),
            employee_name: Some(data.employee_name.clone()),
            employee_address: Some(data.employee_address.clone()),
            date_of_birth: date(Some(&data.date_of_birth)),
            mobile_no: Some(data.mobile_no.clone()),
            email_address: Some(data.email_address.clone()),
            password: Some(data.password.clone()),
            designation: Some(data.designation.clone()),
            currency_symbol: Some(data.currency_symbol.clone()),
            current_salary,
            salary_type: Some(data.salary_type.clone()),
            working_hours_from: time(Some(&data.working_hours_from)),
            working_hours_to: time(Some(&data.working_hours_to)),
        });
        Ok(())
    }

    async fn update_employee(&self, employee_id: i64, data: &EmployeeUpdate) -> StoreResult<()> {
        let mut tables = self.write()?;
        let current_salary = decimal("current_salary", data.current_salary.as_deref())?;
        if let Some(e) = tables
            .employees
            .iter_mut()
            .find(|e| e.employee_id == employee_id)
        {
            e.employee_name = data.employee_name.clone();
            e.employee_username = data.employee_username.clone();
            e.employee_address = data.employee_address.clone();
            e.date_of_birth = date(data.date_of_birth.as_deref());
            e.mobile_no = data.mobile_no.clone();
            e.email_address = data.email_address.clone();
            e.password = data.password.clone();
            e.designation = data.designation.clone();
            e.currency_symbol = data.currency_symbol.clone();
            e.salary_type = data.salary_type.clone();
            e.current_salary = current_salary;
            e.working_hours_from = time(data.working_hours_from.as_deref());
            e.working_hours_to = time(data.working_hours_to.as_deref());
        }
        Ok(())
    }

    async fn delete_employee(&self, employee_id: i64) -> StoreResult<()> {
        self.write()?
            .employees
            .retain(|e| e.employee_id != employee_id);
        Ok(())
    }

    async fn find_by_credentials(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> StoreResult<Option<Employee>> {
        let tables = self.read()?;
        // SQL equality never matches NULL
        let (Some(email), Some(password)) = (email, password) else {
            return Ok(None);
        };
        Ok(tables
            .employees
            .iter()
            .find(|e| {
                e.email_address.as_deref() == Some(email) && e.password.as_deref() == Some(password)
            })
            .cloned())
    }
}

#[async_trait]
impl SiteRepository for MemoryStore {
    async fn create_site(&self, data: &NewSite) -> StoreResult<()> {
        let mut tables = self.write()?;
        let id = tables.next_id();
        tables.sites.push(Site {
            id,
            name: Some(data.name.clone()),
        });
        Ok(())
    }

    async fn list_sites(&self) -> StoreResult<Vec<Site>> {
        Ok(self.read()?.sites.clone())
    }

    async fn delete_site(&self, id: i64) -> StoreResult<()> {
        self.write()?.sites.retain(|s| s.id != id);
        Ok(())
    }
}

#[async_trait]
impl HolidayRepository for MemoryStore {
    async fn create_holiday(&self, data: &HolidayCreate) -> StoreResult<()> {
        let mut tables = self.write()?;
        // holidays.holiday_name is NOT NULL in the reference schema
        let Some(name) = data.holiday_name.clone() else {
            return Err(StoreError::Backend(
                "Column 'holiday_name' cannot be null".into(),
            ));
        };
        let id = tables.next_id();
        tables.holidays.push(Holiday {
            id,
            holiday_name: Some(name),
            holiday_date: date(data.holiday_date.as_deref()),
        });
        Ok(())
    }

    async fn list_holidays(&self) -> StoreResult<Vec<Holiday>> {
        Ok(self.read()?.holidays.clone())
    }
}

#[async_trait]
impl NoticeRepository for MemoryStore {
    async fn create_notice(&self, data: &NoticeCreate) -> StoreResult<()> {
        let mut tables = self.write()?;
        let id = tables.next_id();
        tables.notices.push(Notice {
            id,
            text: data.text.clone(),
            timestamp: Some(Utc::now()),
        });
        Ok(())
    }

    async fn list_notices(&self) -> StoreResult<Vec<Notice>> {
        let mut notices = self.read()?.notices.clone();
        // Later inserts win ties, as auto-increment order would
        notices.sort_by(|a, b| (b.timestamp, b.id).cmp(&(a.timestamp, a.id)));
        Ok(notices)
    }

    async fn delete_notice(&self, id: i64) -> StoreResult<()> {
        self.write()?.notices.retain(|n| n.id != id);
        Ok(())
    }

    async fn list_confirmations(&self, notice_id: i64) -> StoreResult<Vec<NoticeConfirmation>> {
        Ok(self
            .read()?
            .confirmations
            .iter()
            .filter(|(id, _)| *id == notice_id)
            .map(|(_, c)| c.clone())
            .collect())
    }
}

#[async_trait]
impl AttendanceRepository for MemoryStore {
    async fn list_leave_applications(&self) -> StoreResult<Vec<LeaveApplication>> {
        Ok(self.read()?.leave.clone())
    }

    async fn leave_in_month(
        &self,
        username: &str,
        month: Option<u32>,
        year: Option<i32>,
    ) -> StoreResult<Vec<LeaveApplication>> {
        Ok(self
            .read()?
            .leave
            .iter()
            .filter(|l| l.employee_username.as_deref() == Some(username))
            .filter(|l| in_month(l.applied_on, month, year))
            .cloned()
            .collect())
    }

    async fn attendance_in_month(
        &self,
        username: &str,
        month: Option<u32>,
        year: Option<i32>,
    ) -> StoreResult<Vec<AttendanceMark>> {
        Ok(self
            .read()?
            .attendance
            .iter()
            .filter(|a| a.employee_username.as_deref() == Some(username))
            .filter(|a| in_month(a.attendance_date, month, year))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SalaryRepository for MemoryStore {
    async fn upsert_salary(&self, username: &str, data: &SalaryUpdate) -> StoreResult<()> {
        let mut tables = self.write()?;
        let row = SalaryDetail {
            employee_username: username.to_string(),
            total_salary: decimal("total_salary", data.total_salary.as_deref())?,
            advance_taken_amount: decimal(
                "advance_taken_amount",
                data.advance_taken_amount.as_deref(),
            )?,
            advance_taken_date: date(data.advance_taken_date.as_deref()),
            bonus_amount: decimal("bonus_amount", data.bonus_amount.as_deref())?,
            bonus_date: date(data.bonus_date.as_deref()),
            final_salary: decimal("final_salary", data.final_salary.as_deref())?,
            advance_reason: data.advance_reason.clone(),
            bonus_reason: data.bonus_reason.clone(),
        };
        match tables
            .salary
            .iter_mut()
            .find(|r| r.employee_username == username)
        {
            Some(existing) => *existing = row,
            None => tables.salary.push(row),
        }
        Ok(())
    }

    async fn salary_details(&self, username: &str) -> StoreResult<Vec<SalaryDetail>> {
        Ok(self
            .read()?
            .salary
            .iter()
            .filter(|r| r.employee_username == username)
            .cloned()
            .collect())
    }

    async fn confirmed_salary(&self, username: &str) -> StoreResult<Vec<ConfirmedSalary>> {
        Ok(self
            .read()?
            .confirmed_salary
            .iter()
            .filter(|r| r.employee_username == username)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Store for MemoryStore {}

// ========== App and request helpers ==========

pub fn app(store: Arc<MemoryStore>) -> Router {
    app_with_uploads(store, PathBuf::from("uploads"))
}

pub fn app_with_uploads(store: Arc<MemoryStore>, uploads_dir: PathBuf) -> Router {
    let state = AppState::new(store, SessionTokens::new(TEST_SECRET), uploads_dir);
    build_app(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    json_request("POST", uri, body)
}

pub fn put_json(uri: &str, body: Value) -> Request<Body> {
    json_request("PUT", uri, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Drive one request through the app and collect the whole body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

/// Like [`send`], decoding the body as JSON
pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", String::from_utf8_lossy(&bytes)));
    (status, value)
}

pub fn text(bytes: &Bytes) -> &str {
    std::str::from_utf8(bytes).unwrap()
}
