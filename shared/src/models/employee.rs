//! Employee Model

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::required::{MissingFields, RequiredFields};
use super::serde_helpers::{lenient_amount, lenient_text};

/// Employee entity (`employee` table)
///
/// Returned as-is by the API, password included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub employee_id: i64,
    pub employee_username: Option<String>,
    pub employee_name: Option<String>,
    pub employee_address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub mobile_no: Option<String>,
    pub email_address: Option<String>,
    /// Plaintext, compared by equality at login
    pub password: Option<String>,
    pub designation: Option<String>,
    pub currency_symbol: Option<String>,
    pub current_salary: Option<Decimal>,
    /// e.g. monthly, daily, hourly
    pub salary_type: Option<String>,
    pub working_hours_from: Option<NaiveTime>,
    pub working_hours_to: Option<NaiveTime>,
}

/// Create employee payload, as received
///
/// Every field is required; see [`EmployeeCreate::validate`]. Scalars of any
/// JSON type are accepted and kept as text for the store to coerce.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeCreate {
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_address: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient_text")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mobile_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub currency_symbol: Option<String>,
    /// Kept as text; see [`EmployeeCreate::validate`]
    #[serde(default, deserialize_with = "lenient_amount")]
    pub current_salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub salary_type: Option<String>,
    /// `HH:MM` or `HH:MM:SS`
    #[serde(default, deserialize_with = "lenient_text")]
    pub working_hours_from: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub working_hours_to: Option<String>,
}

/// Create employee payload with every required field present
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEmployee {
    pub employee_username: String,
    pub employee_name: String,
    pub employee_address: String,
    pub date_of_birth: String,
    pub mobile_no: String,
    pub email_address: String,
    pub password: String,
    pub designation: String,
    pub currency_symbol: String,
    /// Decimal text, written to a DECIMAL column
    pub current_salary: String,
    pub salary_type: String,
    pub working_hours_from: String,
    pub working_hours_to: String,
}

impl EmployeeCreate {
    /// Check that every field is present and non-empty.
    ///
    /// A `current_salary` that reads as zero is treated as missing.
    pub fn validate(self) -> Result<NewEmployee, MissingFields> {
        let mut required = RequiredFields::default();
        let employee = NewEmployee {
            employee_username: required.text("employee_username", self.employee_username),
            employee_name: required.text("employee_name", self.employee_name),
            employee_address: required.text("employee_address", self.employee_address),
            date_of_birth: required.text("date_of_birth", self.date_of_birth),
            mobile_no: required.text("mobile_no", self.mobile_no),
            email_address: required.text("email_address", self.email_address),
            password: required.text("password", self.password),
            designation: required.text("designation", self.designation),
            currency_symbol: required.text("currency_symbol", self.currency_symbol),
            current_salary: required.amount("current_salary", self.current_salary),
            salary_type: required.text("salary_type", self.salary_type),
            working_hours_from: required.text("working_hours_from", self.working_hours_from),
            working_hours_to: required.text("working_hours_to", self.working_hours_to),
        };
        required.finish(employee)
    }
}

/// Update employee payload
///
/// Overwrites every column of the row; absent fields are written as NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mobile_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub currency_symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub salary_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub current_salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub working_hours_from: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub working_hours_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> serde_json::Value {
        json!({
            "employee_username": "asha",
            "employee_name": "Asha Rao",
            "employee_address": "12 Park Street",
            "date_of_birth": "1994-03-18",
            "mobile_no": "9876543210",
            "email_address": "asha@example.com",
            "password": "secret",
            "designation": "Site Engineer",
            "currency_symbol": "₹",
            "current_salary": 42000,
            "salary_type": "monthly",
            "working_hours_from": "09:00",
            "working_hours_to": "18:00"
        })
    }

    fn validate(value: serde_json::Value) -> Result<NewEmployee, MissingFields> {
        serde_json::from_value::<EmployeeCreate>(value).unwrap().validate()
    }

    #[test]
    fn test_validate_complete_payload() {
        let employee = validate(full_payload()).expect("complete payload should validate");
        assert_eq!(employee.employee_username, "asha");
        assert_eq!(employee.current_salary, "42000");
    }

    #[test]
    fn test_validate_reports_missing_and_empty_fields() {
        let mut value = full_payload();
        value.as_object_mut().unwrap().remove("designation");
        value["mobile_no"] = json!("");

        let err = validate(value).unwrap_err();
        assert_eq!(err.0, vec!["mobile_no", "designation"]);
    }

    #[test]
    fn test_numeric_text_fields_are_accepted() {
        let mut value = full_payload();
        value["mobile_no"] = json!(9876543210u64);
        value["password"] = json!(12345);

        let employee = validate(value).unwrap();
        assert_eq!(employee.mobile_no, "9876543210");
        assert_eq!(employee.password, "12345");
    }

    #[test]
    fn test_zero_salary_counts_as_missing() {
        for zero in [json!(0), json!("0"), json!("0.00"), json!("")] {
            let mut value = full_payload();
            value["current_salary"] = zero.clone();
            assert_eq!(validate(value).unwrap_err().0, vec!["current_salary"], "{zero}");
        }
    }

    #[test]
    fn test_salary_text_is_passed_through() {
        let mut value = full_payload();
        value["current_salary"] = json!("42000.50");
        assert_eq!(validate(value).unwrap().current_salary, "42000.50");

        // Not ours to judge; the DECIMAL column rejects it
        let mut value = full_payload();
        value["current_salary"] = json!("abc");
        assert_eq!(validate(value).unwrap().current_salary, "abc");
    }

    #[test]
    fn test_update_tolerates_empty_body() {
        let update: EmployeeUpdate = serde_json::from_value(json!({})).unwrap();
        assert!(update.employee_name.is_none());
        assert!(update.current_salary.is_none());
    }

    #[test]
    fn test_update_accepts_numbers() {
        let update: EmployeeUpdate =
            serde_json::from_value(json!({ "mobile_no": 555, "current_salary": 31000.5 })).unwrap();
        assert_eq!(update.mobile_no.as_deref(), Some("555"));
        assert_eq!(update.current_salary.as_deref(), Some("31000.5"));
    }
}
