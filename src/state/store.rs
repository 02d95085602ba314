// Employee store
// Owns the id -> record map and the identifier counter

use crate::state::model::{Employee, EmployeeId, EmployeePatch, NewEmployee};
use chrono::Utc;
use std::collections::HashMap;

/// Failure signals for the uniqueness-checked store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the requested identifier
    NotFound,
    /// The supplied email is already used by another record
    DuplicateEmail,
}

/// In-memory employee store
///
/// Sole owner of all employee records. Identifiers start at 1 and are never
/// reused, even after deletion. The store itself is single-threaded; callers
/// that share it across tasks must wrap it in a lock (the service layer uses
/// one `RwLock` around the whole store).
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    /// Registry of all employees (id -> Employee)
    employees: HashMap<EmployeeId, Employee>,
    /// Next identifier to assign, monotonically increasing
    next_id: EmployeeId,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore {
    /// Create an empty store with the identifier counter at 1
    pub fn new() -> Self {
        Self {
            employees: HashMap::new(),
            next_id: 1,
        }
    }

    /// Insert a new employee, assigning the next identifier
    ///
    /// Both timestamps are set to the current time. Performs no uniqueness
    /// checking; use [`EmployeeStore::insert_unique`] when the email
    /// invariant must hold.
    pub fn insert(&mut self, new: NewEmployee) -> Employee {
        let id = self.next_id;
        self.next_id += 1;

        let now = Utc::now();
        let employee = Employee {
            id,
            name: new.name,
            email: new.email,
            department: new.department,
            position: new.position,
            salary: new.salary,
            created_at: now,
            updated_at: now,
        };
        self.employees.insert(id, employee.clone());
        employee
    }

    /// Insert a new employee only if its email is not already in use
    ///
    /// The check and the insert happen under the same `&mut self` borrow, so
    /// no other caller can slip a conflicting record in between.
    pub fn insert_unique(&mut self, new: NewEmployee) -> Result<Employee, StoreError> {
        if self.email_in_use(&new.email, None) {
            return Err(StoreError::DuplicateEmail);
        }
        Ok(self.insert(new))
    }

    /// Get all employees in ascending id order
    ///
    /// Ids are never reused, so this equals insertion order.
    pub fn list(&self) -> Vec<Employee> {
        let mut employees: Vec<Employee> = self.employees.values().cloned().collect();
        employees.sort_by_key(|e| e.id);
        employees
    }

    /// Get an employee by id
    /// Returns None when no record has this id
    pub fn get(&self, id: EmployeeId) -> Option<Employee> {
        self.employees.get(&id).cloned()
    }

    /// Apply a partial update to an employee
    ///
    /// Returns None if the id is unknown. Only fields present in the patch
    /// are overwritten; `updated_at` is refreshed either way.
    pub fn update(&mut self, id: EmployeeId, patch: EmployeePatch) -> Option<Employee> {
        let employee = self.employees.get_mut(&id)?;
        employee.apply_patch(patch);
        Some(employee.clone())
    }

    /// Apply a partial update only if it keeps the email invariant
    ///
    /// Fails with `NotFound` for an unknown id, and with `DuplicateEmail`
    /// when the patch supplies an email already used by a different record.
    /// Keeping (or re-supplying) the record's own email is allowed.
    pub fn update_unique(
        &mut self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee, StoreError> {
        if !self.contains(id) {
            return Err(StoreError::NotFound);
        }
        if let Some(email) = &patch.email {
            if self.email_in_use(email, Some(id)) {
                return Err(StoreError::DuplicateEmail);
            }
        }
        self.update(id, patch).ok_or(StoreError::NotFound)
    }

    /// Remove an employee by id
    /// Returns true if a record was removed, false if the id was unknown
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        self.employees.remove(&id).is_some()
    }

    /// Whether a record with this id exists
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.employees.contains_key(&id)
    }

    /// Whether any record other than `exclude` uses exactly this email
    ///
    /// Case-sensitive exact match, linear scan over all records.
    pub fn email_in_use(&self, email: &str, exclude: Option<EmployeeId>) -> bool {
        self.employees
            .values()
            .any(|e| e.email == email && Some(e.id) != exclude)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Insert the three fixed demo records
    /// Returns the number of records inserted
    pub fn seed_sample_data(&mut self) -> usize {
        let samples = [
            NewEmployee {
                name: "John Doe".to_string(),
                email: "john.doe@company.com".to_string(),
                department: "Engineering".to_string(),
                position: "Senior Developer".to_string(),
                salary: 85000.0,
            },
            NewEmployee {
                name: "Jane Smith".to_string(),
                email: "jane.smith@company.com".to_string(),
                department: "Marketing".to_string(),
                position: "Marketing Manager".to_string(),
                salary: 65000.0,
            },
            NewEmployee {
                name: "Bob Johnson".to_string(),
                email: "bob.johnson@company.com".to_string(),
                department: "HR".to_string(),
                position: "HR Specialist".to_string(),
                salary: 55000.0,
            },
        ];

        let count = samples.len();
        for sample in samples {
            self.insert(sample);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(name: &str, email: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            email: email.to_string(),
            department: "Eng".to_string(),
            position: "Dev".to_string(),
            salary: 50000.0,
        }
    }

    #[test]
    fn test_store_starts_empty() {
        let store = EmployeeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut store = EmployeeStore::new();
        let first = store.insert(new_employee("Ann", "ann@co.com"));
        let second = store.insert(new_employee("Bo", "bo@co.com"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insert_stamps_equal_timestamps() {
        let mut store = EmployeeStore::new();
        let employee = store.insert(new_employee("Ann", "ann@co.com"));

        assert_eq!(employee.created_at, employee.updated_at);

        let fetched = store.get(employee.id).unwrap();
        assert_eq!(fetched, employee);
    }

    #[test]
    fn test_ids_are_never_reused_after_deletion() {
        let mut store = EmployeeStore::new();
        let mut ids = Vec::new();

        for i in 0..5 {
            let email = format!("e{}@co.com", i);
            let employee = store.insert(new_employee("Emp", &email));
            ids.push(employee.id);
            // Delete every other record as we go
            if i % 2 == 0 {
                assert!(store.remove(employee.id));
            }
        }

        // All ids distinct and strictly increasing despite interleaved deletes
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_get_unknown_id_returns_none() {
        let store = EmployeeStore::new();
        assert!(store.get(999).is_none());
        assert!(!store.contains(999));
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let mut store = EmployeeStore::new();
        let employee = store.insert(new_employee("Ann", "ann@co.com"));

        let updated = store
            .update(
                employee.id,
                EmployeePatch {
                    salary: Some(60000.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.salary, 60000.0);
        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.email, "ann@co.com");
        assert_eq!(updated.created_at, employee.created_at);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_update_empty_patch_advances_updated_at() {
        let mut store = EmployeeStore::new();
        let employee = store.insert(new_employee("Ann", "ann@co.com"));

        let updated = store.update(employee.id, EmployeePatch::default()).unwrap();

        assert_eq!(updated.name, employee.name);
        assert_eq!(updated.salary, employee.salary);
        assert!(updated.updated_at >= employee.updated_at);
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let mut store = EmployeeStore::new();
        assert!(store.update(42, EmployeePatch::default()).is_none());
    }

    #[test]
    fn test_remove_is_idempotent_signal() {
        let mut store = EmployeeStore::new();
        let employee = store.insert(new_employee("Ann", "ann@co.com"));

        assert!(store.remove(employee.id));
        assert!(store.get(employee.id).is_none());
        assert!(!store.remove(employee.id));
    }

    #[test]
    fn test_email_in_use_tracks_inserts_and_deletes() {
        let mut store = EmployeeStore::new();
        assert!(!store.email_in_use("ann@co.com", None));

        let employee = store.insert(new_employee("Ann", "ann@co.com"));
        assert!(store.email_in_use("ann@co.com", None));

        store.remove(employee.id);
        assert!(!store.email_in_use("ann@co.com", None));
    }

    #[test]
    fn test_email_in_use_is_case_sensitive() {
        let mut store = EmployeeStore::new();
        store.insert(new_employee("Ann", "ann@co.com"));

        assert!(store.email_in_use("ann@co.com", None));
        assert!(!store.email_in_use("Ann@co.com", None));
    }

    #[test]
    fn test_insert_unique_rejects_taken_email() {
        let mut store = EmployeeStore::new();
        store.insert(new_employee("Ann", "ann@co.com"));

        let result = store.insert_unique(new_employee("Imposter", "ann@co.com"));
        assert_eq!(result.unwrap_err(), StoreError::DuplicateEmail);
        // Failed insert is a no-op: no record stored, no id burned
        assert_eq!(store.len(), 1);
        let next = store.insert(new_employee("Bo", "bo@co.com"));
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_update_unique_allows_own_email() {
        let mut store = EmployeeStore::new();
        let employee = store.insert(new_employee("Ann", "ann@co.com"));

        let result = store.update_unique(
            employee.id,
            EmployeePatch {
                email: Some("ann@co.com".to_string()),
                name: Some("Anna".to_string()),
                ..Default::default()
            },
        );

        let updated = result.unwrap();
        assert_eq!(updated.name, "Anna");
        assert_eq!(updated.email, "ann@co.com");
    }

    #[test]
    fn test_update_unique_rejects_other_records_email() {
        let mut store = EmployeeStore::new();
        let ann = store.insert(new_employee("Ann", "ann@co.com"));
        let bo = store.insert(new_employee("Bo", "bo@co.com"));

        let result = store.update_unique(
            bo.id,
            EmployeePatch {
                email: Some("ann@co.com".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result.unwrap_err(), StoreError::DuplicateEmail);

        // Failed update left both records untouched
        assert_eq!(store.get(bo.id).unwrap().email, "bo@co.com");
        assert_eq!(store.get(ann.id).unwrap().email, "ann@co.com");
    }

    #[test]
    fn test_update_unique_unknown_id() {
        let mut store = EmployeeStore::new();
        let result = store.update_unique(42, EmployeePatch::default());
        assert_eq!(result.unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn test_list_is_sorted_by_id() {
        let mut store = EmployeeStore::new();
        store.insert(new_employee("Ann", "ann@co.com"));
        store.insert(new_employee("Bo", "bo@co.com"));
        store.insert(new_employee("Cy", "cy@co.com"));
        store.remove(2);
        store.insert(new_employee("Di", "di@co.com"));

        let ids: Vec<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_seed_sample_data() {
        let mut store = EmployeeStore::new();
        let seeded = store.seed_sample_data();

        assert_eq!(seeded, 3);
        assert_eq!(store.len(), 3);
        assert!(store.email_in_use("john.doe@company.com", None));
        assert!(store.email_in_use("jane.smith@company.com", None));
        assert!(store.email_in_use("bob.johnson@company.com", None));
    }

    #[test]
    fn test_crud_scenario() {
        let mut store = EmployeeStore::new();

        let ann = store.insert(new_employee("Ann", "ann@co.com"));
        assert_eq!(ann.id, 1);
        let bo = store.insert(NewEmployee {
            name: "Bo".to_string(),
            email: "bo@co.com".to_string(),
            department: "Eng".to_string(),
            position: "Dev".to_string(),
            salary: 40000.0,
        });
        assert_eq!(bo.id, 2);

        assert!(!store.email_in_use("ann@co.com", Some(1)));
        assert!(store.email_in_use("ann@co.com", None));

        let updated = store
            .update(
                1,
                EmployeePatch {
                    salary: Some(60000.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.salary, 60000.0);
        assert_eq!(updated.name, "Ann");

        assert!(store.remove(2));

        let remaining = store.list();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 1);
    }
}
