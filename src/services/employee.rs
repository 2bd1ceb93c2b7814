use std::sync::Arc;

use uuid::Uuid;

use crate::errors::DirectoryError;
use crate::models::employee::{Employee, EmployeeRepresentation};
use crate::store::EmployeeStore;

/// Business rules for employee records: email uniqueness on create/update,
/// existence on read/update/delete, and the mapping between the boundary
/// representation and the persisted entity. Holds no state between calls.
pub struct EmployeeDirectory {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeDirectory {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        rep: EmployeeRepresentation,
    ) -> Result<EmployeeRepresentation, DirectoryError> {
        if self.store.exists_by_email(&rep.email).await? {
            return Err(DirectoryError::DuplicateEmail(rep.email));
        }

        let mut employee = Employee::from_representation(&rep);
        // The store assigns the id on insert; anything in the payload is moot.
        employee.employee_id = None;
        let saved = self.store.save(employee).await?;
        Ok(saved.into_representation())
    }

    pub async fn get_by_id(
        &self,
        employee_id: Uuid,
    ) -> Result<EmployeeRepresentation, DirectoryError> {
        let employee = self
            .store
            .find_by_id(employee_id)
            .await?
            .ok_or(DirectoryError::NotFound(employee_id))?;
        Ok(employee.into_representation())
    }

    pub async fn get_all(&self) -> Result<Vec<EmployeeRepresentation>, DirectoryError> {
        let employees = self.store.find_all().await?;
        Ok(employees
            .into_iter()
            .map(Employee::into_representation)
            .collect())
    }

    pub async fn update(
        &self,
        employee_id: Uuid,
        rep: EmployeeRepresentation,
    ) -> Result<EmployeeRepresentation, DirectoryError> {
        let existing = self
            .store
            .find_by_id(employee_id)
            .await?
            .ok_or(DirectoryError::NotFound(employee_id))?;

        // Keeping your own email is always allowed; only an actual change is
        // checked against the rest of the records.
        if rep.email != existing.email && self.store.exists_by_email(&rep.email).await? {
            return Err(DirectoryError::DuplicateEmail(rep.email));
        }

        let mut employee = Employee::from_representation(&rep);
        // The id comes from the lookup key, never from the payload.
        employee.employee_id = Some(employee_id);
        let saved = self.store.save(employee).await?;
        Ok(saved.into_representation())
    }

    pub async fn delete(&self, employee_id: Uuid) -> Result<(), DirectoryError> {
        if !self.store.exists_by_id(employee_id).await? {
            return Err(DirectoryError::NotFound(employee_id));
        }
        self.store.delete_by_id(employee_id).await?;
        Ok(())
    }
}
