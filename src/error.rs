use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Failures of the student store. Writes surface these to the admin caller.
#[derive(Debug, Error)]
pub enum StudentError {
    #[error("ValidationError: {0}")]
    Validation(String),

    #[error("UniquenessViolation: a student named {0:?} already exists")]
    UniquenessViolation(String),

    #[error("DatabaseError: {0}")]
    Database(#[from] libsql::Error),
}

impl StudentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::Validation(_) => StatusCode::BAD_REQUEST,
            StudentError::UniquenessViolation(_) => StatusCode::CONFLICT,
            StudentError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a failed insert/update of `name` onto the store's error taxonomy.
    pub(crate) fn from_write(err: libsql::Error, name: &str) -> Self {
        let msg = err.to_string();
        if msg.contains("UNIQUE constraint failed") {
            StudentError::UniquenessViolation(name.to_owned())
        } else if msg.contains("CHECK constraint failed") {
            StudentError::Validation(format!("name {name:?} violates the students schema"))
        } else {
            StudentError::Database(err)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, msg: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            StudentError::Database(_) => error_response(status, "internal server error"),
            other => error_response(status, &other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            StudentError::Validation("too long".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            StudentError::UniquenessViolation("Ada".into()).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_unique_constraint_is_recognised() {
        let err = libsql::Error::SqliteFailure(
            2067,
            "UNIQUE constraint failed: students.name".to_string(),
        );
        assert!(matches!(
            StudentError::from_write(err, "Ada"),
            StudentError::UniquenessViolation(name) if name == "Ada"
        ));

        let err = libsql::Error::SqliteFailure(
            275,
            "CHECK constraint failed: length(name) BETWEEN 1 AND 200".to_string(),
        );
        assert!(matches!(StudentError::from_write(err, "Ada"), StudentError::Validation(_)));

        let err = libsql::Error::SqliteFailure(1, "disk I/O error".to_string());
        assert!(matches!(StudentError::from_write(err, "Ada"), StudentError::Database(_)));
    }

    #[test]
    fn test_display() {
        let err = StudentError::UniquenessViolation("Ada".into());
        assert_eq!(err.to_string(), "UniquenessViolation: a student named \"Ada\" already exists");
    }
}
