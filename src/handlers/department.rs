use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::store::Store;

#[derive(Deserialize, Validate)]
pub struct DepartmentPayload {
    #[validate(length(max = 100))]
    name: String,
}

pub async fn get_departments(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    let departments = store.list_departments().await?;
    Ok(HttpResponse::Ok().json(departments))
}

pub async fn create_department(
    store: web::Data<dyn Store>,
    new_department: web::Json<DepartmentPayload>,
) -> Result<HttpResponse, AppError> {
    new_department.validate()?;

    let department = store.create_department(&new_department.name).await?;
    Ok(HttpResponse::Created().json(department))
}

/// Answers 200 with an empty body when the id matches nothing.
pub async fn update_department(
    store: web::Data<dyn Store>,
    department_id: web::Path<i32>,
    updates: web::Json<DepartmentPayload>,
) -> Result<HttpResponse, AppError> {
    updates.validate()?;

    match store.update_department(department_id.into_inner(), &updates.name).await? {
        Some(department) => Ok(HttpResponse::Ok().json(department)),
        None => Ok(HttpResponse::Ok().finish()),
    }
}

pub async fn delete_department(
    store: web::Data<dyn Store>,
    department_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    store.delete_department(department_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
