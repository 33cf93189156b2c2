use axum::{Router, http::HeaderValue, http::Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::admin::{self, AdminToken};
use crate::config::Config;
use crate::handler::{AppState, not_found};
use crate::students;

/// Everything the routing table depends on besides the shared state.
#[derive(Debug, Clone, Default)]
pub struct RouterConfig {
    pub admin_token: Option<AdminToken>,
    pub cors_origins: Vec<String>,
}

impl RouterConfig {
    pub fn from_config(cfg: &Config) -> Self {
        RouterConfig {
            admin_token: cfg.admin.get_token().map(AdminToken::new),
            cors_origins: cfg.app.cors_origins.clone(),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid cors origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

/// Builds the complete, immutable routing table.
///
/// | path               | handler                          |
/// |--------------------|----------------------------------|
/// | `/api/students/`   | public student list (GET)        |
/// | `/api/students`    | redirect to `/api/students/`     |
/// | `/admin/...`       | admin API, only with a token     |
///
/// Anything else is a JSON 404.
pub fn build_router(state: AppState, cfg: &RouterConfig) -> Router {
    let mut app = Router::new().merge(students::routes());

    match &cfg.admin_token {
        Some(token) => app = app.merge(admin::routes(token.clone())),
        None => tracing::info!("no admin token configured, admin routes disabled"),
    }

    app.fallback(not_found)
        .layer(cors_layer(&cfg.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
