use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::dtos::employee_dto::EmployeeDto;
use crate::application::ports::employee_ports::EmployeeUseCase;
use crate::common::errors::Result;
use crate::domain::repositories::employee_repository::EmployeeRepository;

/// Servicio de aplicación para la gestión de empleados
pub struct EmployeeService {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }
}

#[async_trait]
impl EmployeeUseCase for EmployeeService {
    #[instrument(skip(self))]
    async fn create_employee(&self, dto: EmployeeDto) -> Result<EmployeeDto> {
        info!("Creando empleado: {} {}", dto.first_name, dto.last_name);

        // El id lo asigna el repositorio
        let created = self.employee_repository.create(dto.into_employee(0)).await?;

        debug!("Empleado creado con id {}", created.id());
        Ok(EmployeeDto::from(created))
    }

    #[instrument(skip(self))]
    async fn get_employee(&self, id: i64) -> Result<EmployeeDto> {
        let employee = self.employee_repository.find_by_id(id).await?;
        Ok(EmployeeDto::from(employee))
    }

    #[instrument(skip(self))]
    async fn list_employees(&self) -> Result<Vec<EmployeeDto>> {
        let employees = self.employee_repository.find_all().await?;
        debug!("Encontrados {} empleados", employees.len());

        Ok(employees.into_iter().map(EmployeeDto::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_employee(&self, id: i64, dto: EmployeeDto) -> Result<EmployeeDto> {
        info!("Actualizando empleado {}", id);

        let existing = self.employee_repository.find_by_id(id).await?;
        let updated = existing.with_details(dto.first_name, dto.last_name, dto.email);
        let saved = self.employee_repository.update(updated).await?;

        Ok(EmployeeDto::from(saved))
    }

    #[instrument(skip(self))]
    async fn delete_employee(&self, id: i64) -> Result<()> {
        info!("Eliminando empleado {}", id);

        // Verificar que existe para devolver NotFound con el mensaje adecuado
        self.employee_repository.find_by_id(id).await?;
        self.employee_repository.delete_by_id(id).await?;

        Ok(())
    }
}
