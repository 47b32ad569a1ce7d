use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error, instrument};

use crate::application::dtos::employee_dto::EmployeeDto;
use crate::common::di::AppState;
use crate::common::errors::{DomainError, ErrorKind};

fn error_response(err: DomainError) -> Response {
    let status = match err.kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::AlreadyExists => StatusCode::CONFLICT,
        ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Error procesando solicitud de empleados: {:?}", err);
    } else {
        debug!("Solicitud de empleados rechazada: {}", err);
    }

    (status, Json(json!({ "error": err.message }))).into_response()
}

/// Crea un nuevo empleado
#[instrument(skip(state))]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(dto): Json<EmployeeDto>,
) -> Response {
    match state.employee_service.create_employee(dto).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Obtiene un empleado por su ID
#[instrument(skip(state))]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match state.employee_service.get_employee(id).await {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Lista todos los empleados
#[instrument(skip(state))]
pub async fn list_employees(State(state): State<AppState>) -> Response {
    match state.employee_service.list_employees().await {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Actualiza nombre y email de un empleado existente
#[instrument(skip(state))]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<EmployeeDto>,
) -> Response {
    match state.employee_service.update_employee(id, dto).await {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Elimina un empleado
#[instrument(skip(state))]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match state.employee_service.delete_employee(id).await {
        Ok(()) => (StatusCode::OK, "Employee Deleted Successfully!").into_response(),
        Err(e) => error_response(e),
    }
}
