use async_trait::async_trait;
use sqlx::PgPool;

use super::Store;
use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::employee::Employee;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees")
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn create_employee(&self, name: &str, department_id: i32) -> Result<Employee, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, department_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(department_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: i32,
        name: &str,
        department_id: i32,
    ) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            "UPDATE employees SET name = $1, department_id = $2, updated_at = now() WHERE id = $3 RETURNING *",
        )
        .bind(name)
        .bind(department_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn delete_employee(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_departments(&self) -> Result<Vec<Department>, AppError> {
        let departments = sqlx::query_as::<_, Department>("SELECT * FROM departments")
            .fetch_all(&self.pool)
            .await?;
        Ok(departments)
    }

    async fn create_department(&self, name: &str) -> Result<Department, AppError> {
        let department =
            sqlx::query_as::<_, Department>("INSERT INTO departments (name) VALUES ($1) RETURNING *")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(department)
    }

    async fn update_department(&self, id: i32, name: &str) -> Result<Option<Department>, AppError> {
        let department = sqlx::query_as::<_, Department>(
            "UPDATE departments SET name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(department)
    }

    async fn delete_department(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
