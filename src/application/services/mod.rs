pub mod deferred_delete;
pub mod employee_form_service;
pub mod employee_service;
pub mod navigation;


// Re-exportar para facilitar acceso
pub use deferred_delete::{DeferredDeleteController, ListViewSnapshot};
pub use employee_form_service::EmployeeFormService;
pub use employee_service::EmployeeService;
