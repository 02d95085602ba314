//! Employee service
//!
//! Thin façade between the HTTP handlers and the store. Sequences the
//! existence and email-uniqueness checks around store calls and converts the
//! store's `Option`/`bool` signals into [`AppError`] values.

use crate::error::AppError;
use crate::state::{Employee, EmployeeId, EmployeePatch, EmployeeStore, NewEmployee, StoreError};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Employee service
///
/// Owns a handle to the store behind one `RwLock`. Every mutating method
/// holds the write guard across the whole check-then-act sequence, so the
/// uniqueness invariant cannot be raced even when the runtime serves
/// requests concurrently.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<RwLock<EmployeeStore>>,
}

impl EmployeeService {
    /// Create a service backed by the given store
    pub fn new(store: Arc<RwLock<EmployeeStore>>) -> Self {
        Self { store }
    }

    /// Create an employee
    ///
    /// Fails with `DuplicateEmail` when the email is already in use.
    pub async fn create(&self, new: NewEmployee) -> Result<Employee, AppError> {
        let email = new.email.clone();
        let mut store = self.store.write().await;
        store
            .insert_unique(new)
            .map_err(|_| AppError::DuplicateEmail(email))
    }

    /// Get all employees in ascending id order
    pub async fn list(&self) -> Vec<Employee> {
        self.store.read().await.list()
    }

    /// Get an employee by id
    pub async fn get(&self, id: EmployeeId) -> Result<Employee, AppError> {
        self.store
            .read()
            .await
            .get(id)
            .ok_or(AppError::EmployeeNotFound(id))
    }

    /// Apply a partial update to an employee
    ///
    /// Fails with `EmployeeNotFound` for an unknown id, and with
    /// `DuplicateEmail` when the patch would reassign another record's
    /// email. Re-supplying the record's own email is allowed.
    pub async fn update(&self, id: EmployeeId, patch: EmployeePatch) -> Result<Employee, AppError> {
        let email = patch.email.clone();
        let mut store = self.store.write().await;
        store.update_unique(id, patch).map_err(|err| match err {
            StoreError::NotFound => AppError::EmployeeNotFound(id),
            StoreError::DuplicateEmail => AppError::DuplicateEmail(email.unwrap_or_default()),
        })
    }

    /// Delete an employee by id
    pub async fn delete(&self, id: EmployeeId) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        if store.remove(id) {
            Ok(())
        } else {
            Err(AppError::EmployeeNotFound(id))
        }
    }

    /// Number of stored employees, for the health endpoint
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}
