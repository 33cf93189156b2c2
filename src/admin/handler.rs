//! HTTP Handlers for the admin API

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{StudentError, error_response};
use crate::handler::AppState;
use crate::students::{StudentInput, Students};

#[derive(Debug, Serialize)]
pub struct AdminApiResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct AdminIndex {
    pub models: Vec<&'static str>,
}

fn success<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(AdminApiResponse { data })).into_response()
}

fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(AdminApiResponse { data })).into_response()
}

fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Student not found")
}

fn failure(action: &str, err: StudentError) -> Response {
    match &err {
        StudentError::Database(_) => {
            tracing::error!(error = %crate::unpack_error(&err), "failed to {}", action)
        }
        _ => tracing::info!(error = %err, "refused to {}", action),
    }
    err.into_response()
}

fn required_name(payload: Result<Json<StudentInput>, JsonRejection>) -> Result<String, StudentError> {
    let Json(input) = payload.map_err(|e| StudentError::Validation(e.body_text()))?;
    input
        .name
        .ok_or_else(|| StudentError::Validation("name is required".to_string()))
}

fn student_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, Response> {
    path.map(|Path(id)| id).map_err(|e| {
        tracing::info!(error = %e.body_text(), "rejected student id");
        error_response(StatusCode::BAD_REQUEST, "invalid student id")
    })
}

pub async fn index() -> Response {
    success(AdminIndex {
        models: vec!["students"],
    })
}

pub async fn list_students(State(state): State<AppState>) -> Response {
    let store = Students::new(state.db.connection());

    match store.list_all().await {
        Ok(students) => success(students),
        Err(e) => failure("list students", e),
    }
}

pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Response {
    let store = Students::new(state.db.connection());
    let name = match required_name(payload) {
        Ok(name) => name,
        Err(e) => return failure("create student", e),
    };

    match store.create(&name).await {
        Ok(student) => {
            tracing::info!(id = student.id, name = %student.name, "created student");
            created(student)
        }
        Err(e) => failure("create student", e),
    }
}

pub async fn get_student(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let store = Students::new(state.db.connection());
    let id = match student_id(path) {
        Ok(id) => id,
        Err(res) => return res,
    };

    match store.get(id).await {
        Ok(Some(student)) => success(student),
        Ok(None) => not_found(),
        Err(e) => failure("get student", e),
    }
}

pub async fn rename_student(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Response {
    let store = Students::new(state.db.connection());
    let id = match student_id(path) {
        Ok(id) => id,
        Err(res) => return res,
    };
    let name = match required_name(payload) {
        Ok(name) => name,
        Err(e) => return failure("rename student", e),
    };

    match store.rename(id, &name).await {
        Ok(Some(student)) => {
            tracing::info!(id = student.id, name = %student.name, "renamed student");
            success(student)
        }
        Ok(None) => not_found(),
        Err(e) => failure("rename student", e),
    }
}

pub async fn delete_student(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let store = Students::new(state.db.connection());
    let id = match student_id(path) {
        Ok(id) => id,
        Err(res) => return res,
    };

    match store.delete(id).await {
        Ok(true) => {
            tracing::info!(id, "deleted student");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => not_found(),
        Err(e) => failure("delete student", e),
    }
}
