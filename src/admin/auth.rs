use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::error::error_response;

#[derive(Clone)]
pub struct AdminToken(Arc<str>);

impl AdminToken {
    pub fn new(token: &str) -> Self {
        AdminToken(Arc::from(token))
    }

    pub fn verify(&self, candidate: &str) -> bool {
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

impl std::fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminToken(***)")
    }
}

fn bearer(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

pub async fn require_token(State(token): State<AdminToken>, req: Request, next: Next) -> Response {
    match bearer(&req) {
        Some(candidate) if token.verify(candidate) => next.run(req).await,
        _ => {
            tracing::warn!(path = %req.uri().path(), "rejected admin request");
            error_response(StatusCode::UNAUTHORIZED, "unauthorized")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify() {
        let token = AdminToken::new("s3cret");
        assert!(token.verify("s3cret"));
        assert!(!token.verify("s3cre"));
        assert!(!token.verify("s3cret!"));
        assert!(!token.verify(""));
    }

    #[test]
    fn test_debug_hides_token() {
        assert_eq!(format!("{:?}", AdminToken::new("s3cret")), "AdminToken(***)");
    }

    #[test]
    fn test_bearer_extraction() {
        let req = Request::builder()
            .header(header::AUTHORIZATION, "Bearer abc")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(bearer(&req), Some("abc"));

        let req = Request::builder()
            .header(header::AUTHORIZATION, "Basic abc")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(bearer(&req), None);
    }
}
