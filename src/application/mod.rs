pub mod dtos;
pub mod ports;
pub mod services;

// Re-exportaciones para facilitar el acceso a los principales puertos
pub use ports::employee_ports::EmployeeUseCase;
pub use ports::outbound::{EmployeeApiPort, ErrorSink, NavigationPort};
