use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use super::{LIST_PATH, Students};
use crate::handler::AppState;

/// `GET /api/students/`: every student, as a bare JSON array in store order.
pub async fn list_students(State(state): State<AppState>) -> Response {
    let store = Students::new(state.db.connection());

    match store.list_all().await {
        Ok(students) => {
            tracing::debug!(count = students.len(), "listed students");
            Json(students).into_response()
        }
        Err(e) => {
            tracing::error!(error = %crate::unpack_error(&e), "failed to list students");
            e.into_response()
        }
    }
}

pub async fn append_slash() -> Redirect {
    Redirect::permanent(LIST_PATH)
}
