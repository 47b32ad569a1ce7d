use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::application::dtos::employee_dto::EmployeeDto;
use crate::application::ports::outbound::{EmployeeApiError, EmployeeApiPort, NavigationPort};
use crate::application::services::navigation::Route;
use crate::domain::entities::employee::Employee;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("No employee form at {0}")]
    NotAForm(Route),

    #[error(transparent)]
    Api(#[from] EmployeeApiError),
}

/// Add/update flows reached from the list view
pub struct EmployeeFormService {
    api: Arc<dyn EmployeeApiPort>,
    navigator: Arc<dyn NavigationPort>,
}

impl EmployeeFormService {
    pub fn new(api: Arc<dyn EmployeeApiPort>, navigator: Arc<dyn NavigationPort>) -> Self {
        Self { api, navigator }
    }

    pub fn open_add(&self) {
        self.navigator.go_to(&Route::AddEmployee.path());
    }

    pub fn open_update(&self, id: i64) {
        self.navigator.go_to(&Route::UpdateEmployee(id).path());
    }

    /// Fetches the current values for the update form
    pub async fn load(&self, id: i64) -> Result<EmployeeDto, FormError> {
        let employee = self.api.get(id).await?;
        Ok(EmployeeDto::from(employee))
    }

    /// Saves the form shown at `route` and returns to the list
    #[instrument(skip(self))]
    pub async fn submit(&self, route: Route, form: EmployeeDto) -> Result<Employee, FormError> {
        let saved = match route {
            Route::AddEmployee => self.api.create(form).await?,
            Route::UpdateEmployee(id) => self.api.update(id, form).await?,
            Route::Employees => return Err(FormError::NotAForm(route)),
        };

        info!("Saved employee {}", saved.id());
        self.navigator.go_to(&Route::Employees.path());
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::*;

    use crate::application::ports::outbound::{MockEmployeeApiPort, MockNavigationPort};

    #[tokio::test]
    async fn test_add_creates_then_returns_to_list() {
        let mut api = MockEmployeeApiPort::new();
        api.expect_create()
            .withf(|dto| dto.id.is_none() && dto.first_name == "Ada")
            .times(1)
            .returning(|dto| Ok(dto.into_employee(10)));

        let mut navigator = MockNavigationPort::new();
        navigator.expect_go_to().with(eq("/add-employee")).times(1).return_const(());
        navigator.expect_go_to().with(eq("/employees")).times(1).return_const(());

        let service = EmployeeFormService::new(Arc::new(api), Arc::new(navigator));
        service.open_add();
        let saved = service
            .submit(Route::AddEmployee, EmployeeDto::draft("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap();

        assert_eq!(saved.id(), 10);
    }

    #[tokio::test]
    async fn test_update_failure_stays_on_form() {
        let mut api = MockEmployeeApiPort::new();
        api.expect_update()
            .with(eq(3), always())
            .returning(|_, _| Err(EmployeeApiError::Status { status: 404, message: "missing".into() }));

        let mut navigator = MockNavigationPort::new();
        navigator.expect_go_to().with(eq("/update-employee/3")).times(1).return_const(());
        navigator.expect_go_to().with(eq("/employees")).never();

        let service = EmployeeFormService::new(Arc::new(api), Arc::new(navigator));
        service.open_update(3);
        let err = service
            .submit(Route::UpdateEmployee(3), EmployeeDto::draft("A", "B", "c@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, FormError::Api(EmployeeApiError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_list_route_is_not_a_form() {
        let api = MockEmployeeApiPort::new();
        let navigator = MockNavigationPort::new();

        let service = EmployeeFormService::new(Arc::new(api), Arc::new(navigator));
        let err = service
            .submit(Route::Employees, EmployeeDto::default())
            .await
            .unwrap_err();

        assert!(matches!(err, FormError::NotAForm(Route::Employees)));
    }

    #[tokio::test]
    async fn test_load_maps_employee_to_form() {
        let mut api = MockEmployeeApiPort::new();
        api.expect_get()
            .with(eq(4))
            .returning(|id| Ok(Employee::new(id, "Grace", "Hopper", "grace@example.com")));

        let service = EmployeeFormService::new(Arc::new(api), Arc::new(MockNavigationPort::new()));
        let form = service.load(4).await.unwrap();

        assert_eq!(form.id, Some(4));
        assert_eq!(form.last_name, "Hopper");
    }
}
