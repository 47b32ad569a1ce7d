use async_trait::async_trait;

use crate::application::dtos::employee_dto::EmployeeDto;
use crate::common::errors::Result;

/// Port for employee management use cases served by the backend
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
#[async_trait]
pub trait EmployeeUseCase: Send + Sync {
    /// Stores a new employee and returns it with its id
    async fn create_employee(&self, dto: EmployeeDto) -> Result<EmployeeDto>;

    /// Gets an employee by id
    async fn get_employee(&self, id: i64) -> Result<EmployeeDto>;

    /// Lists all employees
    async fn list_employees(&self) -> Result<Vec<EmployeeDto>>;

    /// Updates names and email of an existing employee
    async fn update_employee(&self, id: i64, dto: EmployeeDto) -> Result<EmployeeDto>;

    /// Deletes an employee
    async fn delete_employee(&self, id: i64) -> Result<()>;
}
