use std::error::Error;

pub mod admin;
pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod router;
pub mod students;

pub fn unpack_error(err: &dyn Error) -> String {
    let mut parts = Vec::new();
    parts.push(err.to_string());
    let mut current = err.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudentError;

    #[test]
    fn test_unpack_error_walks_sources() {
        let inner = libsql::Error::SqliteFailure(1, "disk I/O error".to_string());
        let err = StudentError::Database(inner);
        let unpacked = unpack_error(&err);
        assert!(unpacked.starts_with("DatabaseError: "));
        assert!(unpacked.contains("disk I/O error"));
    }
}
