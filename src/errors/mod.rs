use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Failures surfaced by an employee store implementation. A duplicate email
/// is reported separately so the unique index backs up the application-level
/// pre-check; everything else passes through unmodified.
#[derive(Debug)]
pub enum StoreError {
    DuplicateEmail(String),
    Database(sqlx::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateEmail(email) => write!(f, "Email already exists: {}", email),
            StoreError::Database(err) => write!(f, "Database Error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Database(err) => Some(err),
            StoreError::DuplicateEmail(_) => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Business-rule failures of the employee directory. Exactly two precondition
/// kinds exist; store failures are fatal here and carried through as-is.
#[derive(Debug)]
pub enum DirectoryError {
    NotFound(Uuid),
    DuplicateEmail(String),
    Store(StoreError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::NotFound(id) => write!(f, "Employee not found with id: {}", id),
            DirectoryError::DuplicateEmail(email) => write!(f, "Email already exists: {}", email),
            DirectoryError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for DirectoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(email) => DirectoryError::DuplicateEmail(email),
            other => DirectoryError::Store(other),
        }
    }
}

impl ResponseError for DirectoryError {
    fn error_response(&self) -> HttpResponse {
        match self {
            DirectoryError::NotFound(_) => {
                HttpResponse::NotFound().json(ErrorResponse { error: self.to_string() })
            }
            DirectoryError::DuplicateEmail(_) => {
                HttpResponse::Conflict().json(ErrorResponse { error: self.to_string() })
            }
            DirectoryError::Store(err) => {
                log::error!("Store failure: {:?}", err);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Database error".to_string(),
                })
            }
        }
    }
}
