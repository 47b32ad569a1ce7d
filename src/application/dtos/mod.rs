pub mod employee_dto;
