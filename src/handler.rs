use std::sync::Arc;

use axum::{http::StatusCode, response::Response};

use crate::db::Database;
use crate::error::error_response;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db: Arc::new(db) }
    }
}

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "not found")
}
