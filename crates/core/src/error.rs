//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task {0} not found")]
    TaskNotFound(i64),

    #[error("Task name already exists: {0}")]
    DuplicateName(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// Classify a sqlx failure, turning unique-constraint hits on `name`
    /// into [`Error::DuplicateName`].
    pub(crate) fn from_write(err: sqlx::Error, name: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::DuplicateName(name.to_string())
            }
            _ => Self::Database(err),
        }
    }
}
