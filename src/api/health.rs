//! Health check endpoint

use crate::services::EmployeeService;
use axum::{extract::State, response::Json};
use serde::Serialize;

/// Health response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status indicator, always "ok" while the process is serving
    pub status: String,
    /// Number of employees currently stored
    pub count: usize,
    /// Crate version
    pub version: String,
}

/// GET /health - Service liveness plus the current record count
pub async fn health_check(State(service): State<EmployeeService>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        count: service.count().await,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
