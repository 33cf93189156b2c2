use libsql::Connection;
use serde::{Deserialize, Serialize};

use crate::error::StudentError;

pub const NAME_MAX_CHARS: usize = 200;

/// Wire form is exactly `{"id": <int>, "name": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentInput {
    #[serde(default)]
    pub name: Option<String>,
}

/// Trims `name` and checks it is present and within [`NAME_MAX_CHARS`].
pub fn validate_name(name: &str) -> Result<String, StudentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StudentError::Validation("name is required".to_string()));
    }
    if name.contains('\0') {
        return Err(StudentError::Validation("name must not contain null characters".to_string()));
    }
    let len = name.chars().count();
    if len > NAME_MAX_CHARS {
        return Err(StudentError::Validation(format!(
            "name has {len} characters, at most {NAME_MAX_CHARS} allowed"
        )));
    }
    Ok(name.to_string())
}

pub struct Students<'a> {
    conn: &'a Connection,
}

impl<'a> Students<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<Student>, StudentError> {
        let mut rows = self
            .conn
            .query("SELECT id, name FROM students ORDER BY id ASC", ())
            .await?;
        let mut students = Vec::new();

        while let Some(row) = rows.next().await? {
            students.push(row_to_student(&row)?);
        }

        Ok(students)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Student>, StudentError> {
        let mut rows = self
            .conn
            .query("SELECT id, name FROM students WHERE id = ?", libsql::params![id])
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(row_to_student(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn create(&self, name: &str) -> Result<Student, StudentError> {
        let name = validate_name(name)?;
        let query = "INSERT INTO students (name) VALUES (?) RETURNING id, name";

        let mut rows = self
            .conn
            .query(query, libsql::params![name.as_str()])
            .await
            .map_err(|e| StudentError::from_write(e, &name))?;

        match rows.next().await.map_err(|e| StudentError::from_write(e, &name))? {
            Some(row) => Ok(row_to_student(&row)?),
            None => Err(StudentError::Database(libsql::Error::QueryReturnedNoRows)),
        }
    }

    /// Returns `None` when no student has this id.
    pub async fn rename(&self, id: i64, name: &str) -> Result<Option<Student>, StudentError> {
        let name = validate_name(name)?;
        let query = "UPDATE students SET name = ? WHERE id = ? RETURNING id, name";

        let mut rows = self
            .conn
            .query(query, libsql::params![name.as_str(), id])
            .await
            .map_err(|e| StudentError::from_write(e, &name))?;

        match rows.next().await.map_err(|e| StudentError::from_write(e, &name))? {
            Some(row) => Ok(Some(row_to_student(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<bool, StudentError> {
        let affected = self
            .conn
            .execute("DELETE FROM students WHERE id = ?", libsql::params![id])
            .await?;
        Ok(affected > 0)
    }
}

fn row_to_student(row: &libsql::Row) -> Result<Student, StudentError> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
