use std::sync::Arc;

use crate::application::ports::employee_ports::EmployeeUseCase;
use crate::application::services::employee_service::EmployeeService;
use crate::common::config::AppConfig;
use crate::common::db::create_database_pool;
use crate::domain::repositories::employee_repository::EmployeeRepository;
use crate::infrastructure::repositories::employee_memory_repository::EmployeeMemoryRepository;
use crate::infrastructure::repositories::pg::EmployeePgRepository;

/// Fábrica para los diferentes componentes del backend
pub struct AppServiceFactory {
    config: AppConfig,
}

impl AppServiceFactory {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Elige el repositorio según la configuración: PostgreSQL si hay URL, memoria si no
    pub async fn create_employee_repository(&self) -> Arc<dyn EmployeeRepository> {
        if self.config.database.connection_string.is_none() {
            tracing::info!("EMS_DATABASE_URL no definida, usando repositorio en memoria");
            return Arc::new(EmployeeMemoryRepository::new());
        }

        match create_database_pool(&self.config).await {
            Ok(pool) => {
                tracing::info!("PostgreSQL database pool initialized successfully");
                Arc::new(EmployeePgRepository::new(Arc::new(pool)))
            },
            Err(e) => {
                tracing::error!("Failed to initialize database pool: {}", e);
                tracing::warn!("Falling back to the in-memory employee repository");
                Arc::new(EmployeeMemoryRepository::new())
            }
        }
    }

    /// Construye el estado compartido por las rutas de la API
    pub async fn create_app_state(&self) -> AppState {
        let repository = self.create_employee_repository().await;
        AppState::new(Arc::new(EmployeeService::new(repository)))
    }
}

/// Estado global de la aplicación para inyección de dependencias
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeUseCase>,
}

impl AppState {
    pub fn new(employee_service: Arc<dyn EmployeeUseCase>) -> Self {
        Self { employee_service }
    }
}
