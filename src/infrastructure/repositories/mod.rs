pub mod employee_memory_repository;

// Repositorios PostgreSQL
pub mod pg;

// Re-exportar para facilitar acceso
pub use employee_memory_repository::EmployeeMemoryRepository;
pub use pg::EmployeePgRepository;
