// Exportar los módulos principales del proyecto
pub mod common;
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod interfaces;

// Re-exportaciones públicas comunes
pub use application::services::deferred_delete::{DeferredDeleteController, ListViewSnapshot};
pub use application::services::employee_form_service::EmployeeFormService;
pub use application::services::employee_service::EmployeeService;
pub use common::config::AppConfig;
pub use domain::entities::employee::Employee;
pub use infrastructure::services::http_employee_api::HttpEmployeeApi;
pub use infrastructure::services::route_navigator::RouteNavigator;
pub use infrastructure::services::tracing_error_sink::TracingErrorSink;
