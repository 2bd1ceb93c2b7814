use actix_web::error::ErrorBadRequest;
use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::models::employee::EmployeeRepresentation;
use crate::services::employee::EmployeeDirectory;

fn map_validation_error(err: ValidationErrors) -> actix_web::Error {
    ErrorBadRequest(err.to_string())
}

fn parse_employee_id(raw: &str) -> Result<Uuid, actix_web::Error> {
    Uuid::parse_str(raw).map_err(|_| ErrorBadRequest("Invalid employee ID"))
}

pub async fn create_employee(
    directory: web::Data<EmployeeDirectory>,
    payload: web::Json<EmployeeRepresentation>,
) -> Result<HttpResponse, actix_web::Error> {
    let payload = payload.into_inner();
    payload.validate().map_err(map_validation_error)?;

    let created = directory.create(payload).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn get_employees(
    directory: web::Data<EmployeeDirectory>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = directory.get_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    directory: web::Data<EmployeeDirectory>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee_id = parse_employee_id(&employee_id.into_inner())?;

    let employee = directory.get_by_id(employee_id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee(
    directory: web::Data<EmployeeDirectory>,
    employee_id: web::Path<String>,
    payload: web::Json<EmployeeRepresentation>,
) -> Result<HttpResponse, actix_web::Error> {
    let payload = payload.into_inner();
    payload.validate().map_err(map_validation_error)?;

    let employee_id = parse_employee_id(&employee_id.into_inner())?;

    let updated = directory.update(employee_id, payload).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_employee(
    directory: web::Data<EmployeeDirectory>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee_id = parse_employee_id(&employee_id.into_inner())?;

    directory.delete(employee_id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully",
    })))
}
