pub mod employee_pg_repository;

pub use employee_pg_repository::EmployeePgRepository;
