//! Admin Module
//!
//! Out-of-band management of the roster: the only place students are created,
//! renamed or deleted. Every route requires `Authorization: Bearer <token>`
//! and the module is not mounted at all when no token is configured.
//!
//! # Usage
//!
//! ```rust,ignore
//! use roster::admin;
//!
//! let app = Router::new()
//!     .merge(admin::routes(admin::AdminToken::new("s3cret")))
//!     .with_state(app_state);
//! ```

mod auth;
mod handler;
mod routes;

pub use auth::AdminToken;
pub use routes::routes;
