pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::employee::Employee;

/// Persistence capability required by the employee directory: id-keyed CRUD
/// plus an email-existence query.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    async fn find_by_id(&self, employee_id: Uuid) -> Result<Option<Employee>, StoreError>;

    async fn exists_by_id(&self, employee_id: Uuid) -> Result<bool, StoreError>;

    /// Inserts when `employee_id` is `None` (the store assigns a fresh id),
    /// updates otherwise. Returns the persisted form.
    async fn save(&self, employee: Employee) -> Result<Employee, StoreError>;

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Removes one record. Existence has already been established by the caller.
    async fn delete_by_id(&self, employee_id: Uuid) -> Result<(), StoreError>;
}
