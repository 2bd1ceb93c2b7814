use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::employee::Employee;
use crate::store::EmployeeStore;

/// HashMap-backed store used by tests and local development. Mirrors the
/// Postgres store's semantics, including the unique-email rule the database
/// index enforces.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    records: Mutex<HashMap<Uuid, Employee>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let records = self.records.lock().expect("employee store lock poisoned");
        Ok(records.values().any(|e| e.email == email))
    }

    async fn find_by_id(&self, employee_id: Uuid) -> Result<Option<Employee>, StoreError> {
        let records = self.records.lock().expect("employee store lock poisoned");
        Ok(records.get(&employee_id).cloned())
    }

    async fn exists_by_id(&self, employee_id: Uuid) -> Result<bool, StoreError> {
        let records = self.records.lock().expect("employee store lock poisoned");
        Ok(records.contains_key(&employee_id))
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, StoreError> {
        let mut records = self.records.lock().expect("employee store lock poisoned");
        let employee_id = employee.employee_id.unwrap_or_else(Uuid::new_v4);

        if records
            .values()
            .any(|e| e.email == employee.email && e.employee_id != Some(employee_id))
        {
            return Err(StoreError::DuplicateEmail(employee.email));
        }

        let now = Utc::now();
        employee.employee_id = Some(employee_id);
        employee.created_at = records
            .get(&employee_id)
            .and_then(|e| e.created_at)
            .or(Some(now));
        employee.updated_at = Some(now);
        records.insert(employee_id, employee.clone());
        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        let records = self.records.lock().expect("employee store lock poisoned");
        Ok(records.values().cloned().collect())
    }

    async fn delete_by_id(&self, employee_id: Uuid) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("employee store lock poisoned");
        records.remove(&employee_id);
        Ok(())
    }
}
