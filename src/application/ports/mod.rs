pub mod employee_ports;
pub mod outbound;
