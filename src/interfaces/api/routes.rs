use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
};

use crate::common::di::AppState;
use crate::interfaces::api::handlers::employee_handler;

/// Creates API routes for the application
pub fn create_api_routes(state: AppState) -> Router {
    let employees_router = Router::new()
        .route("/", get(employee_handler::list_employees).post(employee_handler::create_employee))
        .route(
            "/{id}",
            get(employee_handler::get_employee)
                .put(employee_handler::update_employee)
                .delete(employee_handler::delete_employee),
        )
        .with_state(state);

    Router::new()
        .nest("/api/employees", employees_router)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::dtos::employee_dto::EmployeeDto;
    use crate::application::ports::employee_ports::MockEmployeeUseCase;
    use crate::common::errors::DomainError;

    fn app(service: MockEmployeeUseCase) -> Router {
        create_api_routes(AppState::new(Arc::new(service)))
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_created_with_body() {
        let mut service = MockEmployeeUseCase::new();
        service.expect_create_employee()
            .returning(|dto| Ok(EmployeeDto { id: Some(1), ..dto }));

        let response = app(service)
            .oneshot(request(
                Method::POST,
                "/api/employees",
                Some(json!({"firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["firstName"], "Ada");
    }

    #[tokio::test]
    async fn test_get_unknown_employee_is_404_with_message() {
        let mut service = MockEmployeeUseCase::new();
        service.expect_get_employee()
            .returning(|id| Err(DomainError::not_found("Employee", id.to_string())));

        let response = app(service)
            .oneshot(request(Method::GET, "/api/employees/9", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Employee not found: 9");
    }

    #[tokio::test]
    async fn test_delete_confirms_with_text() {
        let mut service = MockEmployeeUseCase::new();
        service.expect_delete_employee().returning(|_| Ok(()));

        let response = app(service)
            .oneshot(request(Method::DELETE, "/api/employees/3", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Employee Deleted Successfully!");
    }

    #[tokio::test]
    async fn test_list_returns_array() {
        let mut service = MockEmployeeUseCase::new();
        service.expect_list_employees().returning(|| {
            Ok(vec![EmployeeDto { id: Some(2), ..EmployeeDto::draft("Alan", "Turing", "alan@example.com") }])
        });

        let response = app(service)
            .oneshot(request(Method::GET, "/api/employees", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["lastName"], "Turing");
    }

    #[tokio::test]
    async fn test_database_timeout_is_gateway_timeout() {
        let mut service = MockEmployeeUseCase::new();
        service.expect_list_employees()
            .returning(|| Err(DomainError::timeout("Database", "pool exhausted")));

        let response = app(service)
            .oneshot(request(Method::GET, "/api/employees", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body_json(response).await["error"], "pool exhausted");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected_before_service() {
        let mut service = MockEmployeeUseCase::new();
        service.expect_get_employee().never();

        let response = app(service)
            .oneshot(request(Method::GET, "/api/employees/abc", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
