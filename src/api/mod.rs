//! API module
//!
//! Contains HTTP request handlers for employee management endpoints and the
//! router wiring them together.

pub mod employees;
pub mod health;

use crate::services::EmployeeService;
use axum::{routing::get, Router};

/// Build the application router
///
/// Middleware (request id, tracing, CORS) is layered on by the caller so
/// tests can drive the bare routes directly.
pub fn create_router(service: EmployeeService) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .with_state(service)
}
