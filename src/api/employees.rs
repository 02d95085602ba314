//! Employee management API handlers
//!
//! Contains HTTP request handlers for employee CRUD operations.

use crate::error::AppError;
use crate::services::EmployeeService;
use crate::state::{Employee, EmployeeId, EmployeePatch, NewEmployee};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Employee response type
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    /// Identifier assigned by the store
    pub id: EmployeeId,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Department the employee belongs to
    pub department: String,
    /// Job title
    pub position: String,
    /// Salary
    pub salary: f64,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            department: employee.department,
            position: employee.position,
            salary: employee.salary,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// GET /employees - List all employees
pub async fn list_employees(
    State(service): State<EmployeeService>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let employees = service
        .list()
        .await
        .into_iter()
        .map(EmployeeResponse::from)
        .collect();

    Ok(Json(employees))
}

/// GET /employees/:id - Get a specific employee
pub async fn get_employee(
    State(service): State<EmployeeService>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = service.get(id).await?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// POST /employees - Create a new employee
pub async fn create_employee(
    State(service): State<EmployeeService>,
    Json(request): Json<NewEmployee>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    request.validate().map_err(AppError::InvalidField)?;

    let employee = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// PUT /employees/:id - Partially update an employee
pub async fn update_employee(
    State(service): State<EmployeeService>,
    Path(id): Path<EmployeeId>,
    Json(patch): Json<EmployeePatch>,
) -> Result<Json<EmployeeResponse>, AppError> {
    patch.validate().map_err(AppError::InvalidField)?;

    let employee = service.update(id, patch).await?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// DELETE /employees/:id - Delete an employee
pub async fn delete_employee(
    State(service): State<EmployeeService>,
    Path(id): Path<EmployeeId>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
