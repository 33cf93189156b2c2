use axum::{Router, routing::get};

use super::handler;
use crate::handler::AppState;

pub const LIST_PATH: &str = "/api/students/";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(LIST_PATH, get(handler::list_students))
        .route("/api/students", get(handler::append_slash))
}
