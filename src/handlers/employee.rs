use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::store::Store;

#[derive(Deserialize, Validate)]
pub struct EmployeePayload {
    #[validate(length(max = 100))]
    name: String,
    department_id: i32,
}

pub async fn get_employees(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    let employees = store.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    store: web::Data<dyn Store>,
    new_employee: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    new_employee.validate()?;

    let employee = store
        .create_employee(&new_employee.name, new_employee.department_id)
        .await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Replaces both fields and bumps `updated_at`. Answers 200 with an empty
/// body when the id matches nothing.
pub async fn update_employee(
    store: web::Data<dyn Store>,
    employee_id: web::Path<i32>,
    updates: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    updates.validate()?;

    let updated = store
        .update_employee(employee_id.into_inner(), &updates.name, updates.department_id)
        .await?;
    match updated {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Ok(HttpResponse::Ok().finish()),
    }
}

/// 204 whether or not the employee existed.
pub async fn delete_employee(
    store: web::Data<dyn Store>,
    employee_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    store.delete_employee(employee_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
