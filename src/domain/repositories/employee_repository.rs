use async_trait::async_trait;

use crate::common::errors::DomainError;
use crate::domain::entities::employee::Employee;

#[derive(Debug, thiserror::Error)]
pub enum EmployeeRepositoryError {
    #[error("Employee is not exists with given Id: {0}")]
    NotFound(i64),

    #[error("Employee already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Database timeout: {0}")]
    Timeout(String),
}

pub type EmployeeRepositoryResult<T> = Result<T, EmployeeRepositoryError>;

impl From<EmployeeRepositoryError> for DomainError {
    fn from(err: EmployeeRepositoryError) -> Self {
        match err {
            EmployeeRepositoryError::NotFound(id) => {
                DomainError::not_found("Employee", id.to_string())
                    .with_message(format!("Employee is not exists with given Id: {}", id))
            },
            EmployeeRepositoryError::AlreadyExists(msg) => {
                DomainError::already_exists("Employee", msg)
            },
            EmployeeRepositoryError::DatabaseError(msg) => {
                DomainError::internal_error("Database", msg)
            },
            EmployeeRepositoryError::Timeout(msg) => {
                DomainError::timeout("Database", msg)
            },
        }
    }
}

/// Storage port for employee records.
///
/// Identifiers are assigned by the implementation on `create`; the id carried
/// by the incoming entity is ignored.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persists a new employee and returns it with its assigned id
    async fn create(&self, employee: Employee) -> EmployeeRepositoryResult<Employee>;

    /// Finds an employee by id
    async fn find_by_id(&self, id: i64) -> EmployeeRepositoryResult<Employee>;

    /// Lists every employee ordered by id
    async fn find_all(&self) -> EmployeeRepositoryResult<Vec<Employee>>;

    /// Replaces the stored record with the same id
    async fn update(&self, employee: Employee) -> EmployeeRepositoryResult<Employee>;

    /// Removes an employee by id
    async fn delete_by_id(&self, id: i64) -> EmployeeRepositoryResult<()>;
}
