//! The one handle every handler talks to.
//!
//! Each method maps to exactly one statement against the store. Nothing here
//! opens a transaction or retries.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::employee::Employee;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// All employees, in whatever order the store returns them.
    async fn list_employees(&self) -> Result<Vec<Employee>, AppError>;

    /// Fails with [`AppError::Conflict`] when `department_id` names no department.
    async fn create_employee(&self, name: &str, department_id: i32) -> Result<Employee, AppError>;

    /// Replaces `name` and `department_id` and refreshes `updated_at`.
    /// Returns `None` when no employee has this id.
    async fn update_employee(
        &self,
        id: i32,
        name: &str,
        department_id: i32,
    ) -> Result<Option<Employee>, AppError>;

    /// Succeeds whether or not the row existed.
    async fn delete_employee(&self, id: i32) -> Result<(), AppError>;

    async fn list_departments(&self) -> Result<Vec<Department>, AppError>;

    async fn create_department(&self, name: &str) -> Result<Department, AppError>;

    /// Returns `None` when no department has this id.
    async fn update_department(&self, id: i32, name: &str) -> Result<Option<Department>, AppError>;

    /// Fails with [`AppError::Conflict`] while any employee references the department.
    async fn delete_department(&self, id: i32) -> Result<(), AppError>;
}
