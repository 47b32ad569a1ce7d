use async_trait::async_trait;
use thiserror::Error;

use crate::application::dtos::employee_dto::EmployeeDto;
use crate::domain::entities::employee::Employee;

/// Failures of the remote employee resource
#[derive(Debug, Error)]
pub enum EmployeeApiError {
    /// The request never produced a response (connection, timeout, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be understood
    #[error("Invalid response body: {0}")]
    Decode(String),
}

pub type EmployeeApiResult<T> = Result<T, EmployeeApiError>;

/// Client-side port to the Backend Resource API
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
#[async_trait]
pub trait EmployeeApiPort: Send + Sync + 'static {
    async fn list(&self) -> EmployeeApiResult<Vec<Employee>>;

    async fn create(&self, employee: EmployeeDto) -> EmployeeApiResult<Employee>;

    async fn get(&self, id: i64) -> EmployeeApiResult<Employee>;

    async fn update(&self, id: i64, employee: EmployeeDto) -> EmployeeApiResult<Employee>;

    async fn delete(&self, id: i64) -> EmployeeApiResult<()>;
}

/// Routes to other views (add/update forms, back to the list)
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
pub trait NavigationPort: Send + Sync + 'static {
    fn go_to(&self, path: &str);
}

/// Errors surfaced by the employee list view.
///
/// None of these reach the caller of a controller operation; they are handed
/// to an [`ErrorSink`].
#[derive(Debug, Error)]
pub enum ListViewError {
    /// Listing failed; the visible list was left unchanged
    #[error("Failed to load employees: {0}")]
    LoadFailure(#[source] EmployeeApiError),

    /// A delete commit failed; the employee was restored to the list
    #[error("Failed to delete employee {id}: {source}")]
    CommitFailure {
        id: i64,
        #[source]
        source: EmployeeApiError,
    },
}

/// Destination for errors that must not propagate to callers
pub trait ErrorSink: Send + Sync + 'static {
    fn report(&self, error: &ListViewError);
}
