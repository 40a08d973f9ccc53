//! In-memory [`Store`] for handler tests.
//!
//! Enforces the same rules as the Postgres schema: `VARCHAR(100)` names,
//! `employees.department_id REFERENCES departments(id)` with no cascade.

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use super::Store;
use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::employee::Employee;

const NAME_MAX_CHARS: usize = 100;

#[derive(Default)]
struct Tables {
    departments: Vec<Department>,
    employees: Vec<Employee>,
    next_department_id: i32,
    next_employee_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// The store wrapped the way `main` registers the Postgres one.
    pub fn data() -> web::Data<dyn Store> {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::default());
        web::Data::from(store)
    }
}

fn check_name(name: &str) -> Result<(), AppError> {
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(AppError::Validation(format!(
            "value too long for type character varying({})",
            NAME_MAX_CHARS
        )));
    }
    Ok(())
}

fn check_department(tables: &Tables, department_id: i32) -> Result<(), AppError> {
    if tables.departments.iter().any(|d| d.id == department_id) {
        Ok(())
    } else {
        Err(AppError::Conflict(
            "insert or update on table \"employees\" violates foreign key constraint \"employees_department_id_fkey\"".to_string(),
        ))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.tables.read().await.employees.clone())
    }

    async fn create_employee(&self, name: &str, department_id: i32) -> Result<Employee, AppError> {
        check_name(name)?;
        let mut tables = self.tables.write().await;
        check_department(&tables, department_id)?;

        tables.next_employee_id += 1;
        let now = Utc::now();
        let employee = Employee {
            id: tables.next_employee_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
            department_id,
        };
        tables.employees.push(employee.clone());
        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: i32,
        name: &str,
        department_id: i32,
    ) -> Result<Option<Employee>, AppError> {
        check_name(name)?;
        let mut tables = self.tables.write().await;
        check_department(&tables, department_id)?;

        let Some(employee) = tables.employees.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        employee.name = name.to_string();
        employee.department_id = department_id;
        // now() in a later statement is always later
        employee.updated_at = Utc::now().max(employee.updated_at + Duration::microseconds(1));
        Ok(Some(employee.clone()))
    }

    async fn delete_employee(&self, id: i32) -> Result<(), AppError> {
        self.tables.write().await.employees.retain(|e| e.id != id);
        Ok(())
    }

    async fn list_departments(&self) -> Result<Vec<Department>, AppError> {
        Ok(self.tables.read().await.departments.clone())
    }

    async fn create_department(&self, name: &str) -> Result<Department, AppError> {
        check_name(name)?;
        let mut tables = self.tables.write().await;
        tables.next_department_id += 1;
        let department = Department {
            id: tables.next_department_id,
            name: name.to_string(),
        };
        tables.departments.push(department.clone());
        Ok(department)
    }

    async fn update_department(&self, id: i32, name: &str) -> Result<Option<Department>, AppError> {
        check_name(name)?;
        let mut tables = self.tables.write().await;
        let department = tables.departments.iter_mut().find(|d| d.id == id).map(|department| {
            department.name = name.to_string();
            department.clone()
        });
        Ok(department)
    }

    async fn delete_department(&self, id: i32) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        if tables.employees.iter().any(|e| e.department_id == id) {
            return Err(AppError::Conflict(
                "update or delete on table \"departments\" violates foreign key constraint \"employees_department_id_fkey\" on table \"employees\"".to_string(),
            ));
        }
        tables.departments.retain(|d| d.id != id);
        Ok(())
    }
}
