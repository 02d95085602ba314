// State management module
// Holds the employee data model and the in-memory store

pub mod model;
pub mod store;

pub use model::{Employee, EmployeeId, EmployeePatch, NewEmployee};
pub use store::{EmployeeStore, StoreError};
