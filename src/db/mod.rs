use log::info;
use sqlx::PgPool;
use std::env;

const EMPLOYEES_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS employees (
    employee_id UUID PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    department TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)";

pub async fn create_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to the database")
}

/// Creates the employees table if it is missing. The UNIQUE constraint on
/// email makes the second of two racing duplicate inserts fail at the store
/// even when both passed the application-level check.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(EMPLOYEES_SCHEMA).execute(pool).await?;
    info!("Database schema is ready");
    Ok(())
}
