pub mod http_employee_api;
pub mod route_navigator;
pub mod tracing_error_sink;
