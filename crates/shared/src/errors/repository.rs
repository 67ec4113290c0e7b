use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Custom: {0}")]
    Custom(String),
}

// Runtime queries surface constraint violations as generic database errors,
// so unique and FK failures are classified here by SQLSTATE.
impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match &err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => RepositoryError::AlreadyExists(db_err.message().to_string()),
                Some("23503") => RepositoryError::ForeignKey(db_err.message().to_string()),
                _ => RepositoryError::Sqlx(err),
            },
            _ => RepositoryError::Sqlx(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = RepositoryError::from(SqlxError::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
