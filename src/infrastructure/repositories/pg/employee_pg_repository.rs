use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;

use crate::domain::entities::employee::Employee;
use crate::domain::repositories::employee_repository::{
    EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult,
};

pub struct EmployeePgRepository {
    pool: Arc<PgPool>,
}

impl EmployeePgRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    // Método auxiliar para mapear errores SQL a errores de dominio
    fn map_sqlx_error(err: sqlx::Error, id: Option<i64>) -> EmployeeRepositoryError {
        match err {
            sqlx::Error::RowNotFound => {
                EmployeeRepositoryError::NotFound(id.unwrap_or_default())
            },
            sqlx::Error::PoolTimedOut => {
                EmployeeRepositoryError::Timeout(
                    "Tiempo agotado esperando una conexión a PostgreSQL".to_string()
                )
            },
            sqlx::Error::Database(db_err) => {
                if db_err.code().map_or(false, |code| code == "23505") {
                    // Código para violación de unicidad en PostgreSQL
                    EmployeeRepositoryError::AlreadyExists(
                        "Email ya registrado".to_string()
                    )
                } else {
                    EmployeeRepositoryError::DatabaseError(
                        format!("Error de base de datos: {}", db_err)
                    )
                }
            },
            _ => EmployeeRepositoryError::DatabaseError(
                format!("Error de base de datos: {}", err)
            ),
        }
    }

    fn from_row(row: &PgRow) -> Employee {
        Employee::new(
            row.get::<i64, _>("id"),
            row.get::<String, _>("first_name"),
            row.get::<String, _>("last_name"),
            row.get::<String, _>("email"),
        )
    }
}

#[async_trait]
impl EmployeeRepository for EmployeePgRepository {
    async fn create(&self, employee: Employee) -> EmployeeRepositoryResult<Employee> {
        let row = sqlx::query(
            r#"
            INSERT INTO employees (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email
            "#
        )
        .bind(employee.first_name())
        .bind(employee.last_name())
        .bind(employee.email())
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| Self::map_sqlx_error(e, None))?;

        Ok(Self::from_row(&row))
    }

    async fn find_by_id(&self, id: i64) -> EmployeeRepositoryResult<Employee> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = $1"
        )
        .bind(id)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| Self::map_sqlx_error(e, Some(id)))?;

        Ok(Self::from_row(&row))
    }

    async fn find_all(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, email FROM employees ORDER BY id"
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| Self::map_sqlx_error(e, None))?;

        Ok(rows.iter().map(Self::from_row).collect())
    }

    async fn update(&self, employee: Employee) -> EmployeeRepositoryResult<Employee> {
        let row = sqlx::query(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4
            WHERE id = $1
            RETURNING id, first_name, last_name, email
            "#
        )
        .bind(employee.id())
        .bind(employee.first_name())
        .bind(employee.last_name())
        .bind(employee.email())
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| Self::map_sqlx_error(e, Some(employee.id())))?;

        Ok(Self::from_row(&row))
    }

    async fn delete_by_id(&self, id: i64) -> EmployeeRepositoryResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&*self.pool)
            .await
            .map_err(|e| Self::map_sqlx_error(e, Some(id)))?;

        if result.rows_affected() == 0 {
            return Err(EmployeeRepositoryError::NotFound(id));
        }
        Ok(())
    }
}
