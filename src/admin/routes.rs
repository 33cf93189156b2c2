use axum::{Router, middleware, routing::get};

use super::{AdminToken, auth, handler};
use crate::handler::AppState;

pub fn routes(token: AdminToken) -> Router<AppState> {
    Router::new()
        .route("/admin", get(handler::index))
        .route("/admin/", get(handler::index))
        .route(
            "/admin/students/",
            get(handler::list_students).post(handler::create_student),
        )
        .route(
            "/admin/students/:id",
            get(handler::get_student)
                .put(handler::rename_student)
                .delete(handler::delete_student),
        )
        .route_layer(middleware::from_fn_with_state(token, auth::require_token))
}
