use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("database error: {0}")]
    Db(String),
    /// Insert or update rejected by a unique index.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    /// A stored row that cannot be represented as a wire record.
    #[error("invalid stored data: {0}")]
    InvalidData(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::UniqueViolation(msg),
            _ => ModelError::Db(e.to_string()),
        }
    }
}
