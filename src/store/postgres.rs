use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::employee::Employee;
use crate::store::EmployeeStore;

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn find_by_id(&self, employee_id: Uuid) -> Result<Option<Employee>, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE employee_id = $1",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn exists_by_id(&self, employee_id: Uuid) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = $1)",
        )
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn save(&self, employee: Employee) -> Result<Employee, StoreError> {
        let now = Utc::now();
        let result = match employee.employee_id {
            None => {
                // Fresh record: the store assigns the id and both timestamps.
                sqlx::query_as::<_, Employee>(
                    "INSERT INTO employees (employee_id, email, name, department, created_at, updated_at) \
                     VALUES ($1, $2, $3, $4, $5, $5) \
                     RETURNING *",
                )
                .bind(Uuid::new_v4())
                .bind(&employee.email)
                .bind(&employee.name)
                .bind(&employee.department)
                .bind(now)
                .fetch_one(&self.pool)
                .await
            }
            Some(employee_id) => {
                // created_at is left untouched on update.
                sqlx::query_as::<_, Employee>(
                    "UPDATE employees SET email = $2, name = $3, department = $4, updated_at = $5 \
                     WHERE employee_id = $1 \
                     RETURNING *",
                )
                .bind(employee_id)
                .bind(&employee.email)
                .bind(&employee.name)
                .bind(&employee.department)
                .bind(now)
                .fetch_one(&self.pool)
                .await
            }
        };

        result.map_err(|err| map_save_error(err, &employee.email))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn delete_by_id(&self, employee_id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// The unique index on employees.email is the backstop for concurrent writes
// that both passed the directory's pre-check; surface it as a duplicate
// rather than a generic database failure.
fn map_save_error(err: sqlx::Error, email: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::DuplicateEmail(email.to_string())
        }
        _ => StoreError::Database(err),
    }
}
