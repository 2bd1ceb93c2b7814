use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Persisted form of an employee record. `employee_id` is `None` until the
/// store assigns one on insert and never changes afterwards. Timestamps are
/// managed by the store and never caller-supplied.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Employee {
    pub employee_id: Option<Uuid>,
    pub email: String,
    pub name: String,
    pub department: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Boundary shape of an employee record. `employeeId` may be omitted on
/// creation requests; on update it is ignored in favor of the lookup id.
#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRepresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<Uuid>,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
}

impl Employee {
    pub fn from_representation(rep: &EmployeeRepresentation) -> Self {
        Employee {
            employee_id: rep.employee_id,
            email: rep.email.clone(),
            name: rep.name.clone(),
            department: rep.department.clone(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn into_representation(self) -> EmployeeRepresentation {
        EmployeeRepresentation {
            employee_id: self.employee_id,
            email: self.email,
            name: self.name,
            department: self.department,
        }
    }
}
