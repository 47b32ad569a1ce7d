pub mod employee_handler;
