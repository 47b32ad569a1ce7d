use serde::{Deserialize, Serialize};

use crate::domain::entities::employee::Employee;

/// Wire representation of an employee.
///
/// The id is absent on creation requests and always present in responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeDto {
    /// Builds a request body without an id
    pub fn draft(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Converts into a domain entity using the given id
    pub fn into_employee(self, id: i64) -> Employee {
        Employee::new(id, self.first_name, self.last_name, self.email)
    }
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: Some(employee.id()),
            first_name: employee.first_name().to_string(),
            last_name: employee.last_name().to_string(),
            email: employee.email().to_string(),
        }
    }
}
