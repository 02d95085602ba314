//! Employee data model
//!
//! Defines the stored record type, the create/update payloads, and the
//! field constraints enforced before anything reaches the store.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Unique identifier for an employee
///
/// Assigned by the store, starting at 1 and strictly increasing. Identifiers
/// are never reused, even after the record is deleted.
pub type EmployeeId = u64;

/// Maximum length of the name field, in characters
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of the department and position fields, in characters
pub const TEXT_FIELD_MAX_LEN: usize = 50;

/// Simple `local@domain.tld` shape check, case-sensitive
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern compiles"));

/// Employee record as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    /// Identifier assigned by the store, immutable once set
    pub id: EmployeeId,
    /// Full name
    pub name: String,
    /// Email address, unique across all stored records
    pub email: String,
    /// Department the employee belongs to
    pub department: String,
    /// Job title
    pub position: String,
    /// Salary, strictly positive
    pub salary: f64,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last modified (equals `created_at` until the
    /// first update)
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Overwrite only the fields present in `patch` and refresh `updated_at`
    ///
    /// Absent fields keep their prior value, so an empty patch still
    /// advances the timestamp without touching any data field.
    pub fn apply_patch(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
        self.updated_at = Utc::now();
    }
}

/// Payload for creating an employee
///
/// All five caller-supplied fields; the store assigns the identifier and
/// both timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEmployee {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Department the employee belongs to
    pub department: String,
    /// Job title
    pub position: String,
    /// Salary, strictly positive
    pub salary: f64,
}

impl NewEmployee {
    /// Validate all field constraints
    /// Returns Ok(()) if valid, Err with the first violation if not
    pub fn validate(&self) -> Result<(), String> {
        validate_text("name", &self.name, NAME_MAX_LEN)?;
        validate_email(&self.email)?;
        validate_text("department", &self.department, TEXT_FIELD_MAX_LEN)?;
        validate_text("position", &self.position, TEXT_FIELD_MAX_LEN)?;
        validate_salary(self.salary)?;
        Ok(())
    }
}

/// Partial update payload
///
/// Any subset of the employee fields; absent fields are left untouched by
/// the merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmployeePatch {
    /// New full name, if changing
    pub name: Option<String>,
    /// New email address, if changing
    pub email: Option<String>,
    /// New department, if changing
    pub department: Option<String>,
    /// New job title, if changing
    pub position: Option<String>,
    /// New salary, if changing
    pub salary: Option<f64>,
}

impl EmployeePatch {
    /// Validate the constraints of every field that is present
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            validate_text("name", name, NAME_MAX_LEN)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(department) = &self.department {
            validate_text("department", department, TEXT_FIELD_MAX_LEN)?;
        }
        if let Some(position) = &self.position {
            validate_text("position", position, TEXT_FIELD_MAX_LEN)?;
        }
        if let Some(salary) = self.salary {
            validate_salary(salary)?;
        }
        Ok(())
    }
}

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty", field));
    }
    if value.chars().count() > max_len {
        return Err(format!("{} cannot exceed {} characters", field, max_len));
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), String> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(format!("invalid email address: {}", value));
    }
    Ok(())
}

fn validate_salary(value: f64) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err("salary must be a positive number".to_string());
    }
    Ok(())
}
