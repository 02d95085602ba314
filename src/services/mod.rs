//! Service layer
//!
//! Business-level operations between the HTTP handlers and the store.

pub mod employees;

pub use employees::EmployeeService;
