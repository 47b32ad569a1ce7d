use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, info};

use crate::application::dtos::employee_dto::EmployeeDto;
use crate::application::ports::outbound::{EmployeeApiError, EmployeeApiPort, EmployeeApiResult};
use crate::common::config::AppConfig;
use crate::domain::entities::employee::Employee;

impl From<reqwest::Error> for EmployeeApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            EmployeeApiError::Decode(err.to_string())
        } else {
            EmployeeApiError::Transport(err.to_string())
        }
    }
}

/// REST client for the `/api/employees` resource
pub struct HttpEmployeeApi {
    base_url: String,
    client: Client,
}

impl HttpEmployeeApi {
    pub fn new(config: &AppConfig) -> EmployeeApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeouts.network_timeout())
            .build()?;

        info!("Employee API client initialized (url={})", config.api_client.base_url);
        Ok(Self {
            base_url: config.api_client.base_url.clone(),
            client,
        })
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Turns non-2xx responses into `Status` errors, keeping the backend's message
    async fn check(response: Response) -> EmployeeApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or(body);

        Err(EmployeeApiError::Status { status: status.as_u16(), message })
    }

    async fn read_employee(response: Response) -> EmployeeApiResult<Employee> {
        let dto: EmployeeDto = Self::check(response).await?.json().await?;
        into_employee(dto)
    }
}

fn into_employee(dto: EmployeeDto) -> EmployeeApiResult<Employee> {
    match dto.id {
        Some(id) => Ok(dto.into_employee(id)),
        None => Err(EmployeeApiError::Decode("employee without id".to_string())),
    }
}

#[async_trait]
impl EmployeeApiPort for HttpEmployeeApi {
    async fn list(&self) -> EmployeeApiResult<Vec<Employee>> {
        let response = self.client.get(&self.base_url).send().await?;
        let dtos: Vec<EmployeeDto> = Self::check(response).await?.json().await?;

        debug!("Fetched {} employees", dtos.len());
        dtos.into_iter().map(into_employee).collect()
    }

    async fn create(&self, employee: EmployeeDto) -> EmployeeApiResult<Employee> {
        let response = self.client.post(&self.base_url).json(&employee).send().await?;
        Self::read_employee(response).await
    }

    async fn get(&self, id: i64) -> EmployeeApiResult<Employee> {
        let response = self.client.get(self.item_url(id)).send().await?;
        Self::read_employee(response).await
    }

    async fn update(&self, id: i64, employee: EmployeeDto) -> EmployeeApiResult<Employee> {
        let response = self.client.put(self.item_url(id)).json(&employee).send().await?;
        Self::read_employee(response).await
    }

    async fn delete(&self, id: i64) -> EmployeeApiResult<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Self::check(response).await?;
        debug!("Backend deleted employee {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    use crate::application::services::employee_service::EmployeeService;
    use crate::common::di::AppState;
    use crate::infrastructure::repositories::employee_memory_repository::EmployeeMemoryRepository;
    use crate::interfaces::api::routes::create_api_routes;

    // Serves the real router over loopback and returns a client pointed at it
    async fn client_for_local_backend() -> HttpEmployeeApi {
        let service = Arc::new(EmployeeService::new(Arc::new(EmployeeMemoryRepository::new())));
        let app = create_api_routes(AppState::new(service));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let mut config = AppConfig::default();
        config.api_client.base_url = format!("http://{}/api/employees", addr);
        HttpEmployeeApi::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_crud_round_against_backend() {
        let api = client_for_local_backend().await;

        let created = api
            .create(EmployeeDto::draft("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap();
        assert_eq!(created.id(), 1);

        let updated = api
            .update(1, EmployeeDto::draft("Ada", "King", "ada.king@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.last_name(), "King");

        let fetched = api.get(1).await.unwrap();
        assert_eq!(fetched, updated);

        assert_eq!(api.list().await.unwrap(), vec![updated]);

        api.delete(1).await.unwrap();
        assert!(api.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_employee_maps_to_status_error() {
        let api = client_for_local_backend().await;

        let err = api.delete(42).await.unwrap_err();
        match err {
            EmployeeApiError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Employee is not exists with given Id: 42");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut config = AppConfig::default();
        config.api_client.base_url = format!("http://{}/api/employees", addr);
        let api = HttpEmployeeApi::new(&config).unwrap();

        assert!(matches!(api.list().await, Err(EmployeeApiError::Transport(_))));
    }
}
