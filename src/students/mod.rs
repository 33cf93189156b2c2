//! Students Module
//!
//! The roster's only record type. A student has a store-assigned `id` and a
//! `name` that is unique across the roster and at most 200 characters long.
//!
//! # Features
//!
//! - Record store over a libsql connection, uniqueness enforced by the schema
//! - Public read-only list endpoint (`GET /api/students/`)
//! - Database migrations included
//!
//! # Usage
//!
//! ```rust,ignore
//! use roster::students;
//!
//! for (name, sql) in students::migrations() {
//!     conn.execute_batch(sql).await?;
//! }
//!
//! let app = Router::new()
//!     .merge(students::routes())
//!     .with_state(app_state);
//!
//! let store = students::Students::new(connection);
//! let ada = store.create("Ada").await?;
//! ```

mod handler;
mod lib;
mod routes;

pub use lib::*;
pub use routes::{LIST_PATH, routes};

/// Returns the migrations for the students module, in application order.
pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[("students_001_schema.sql", include_str!("migrations/001_schema.sql"))]
}
