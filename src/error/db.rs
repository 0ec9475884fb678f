use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DatabaseError {
    pub fn from_sqlx_error(error: sqlx::Error, context: &str) -> Self {
        match error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound(context.to_string()),
            sqlx::Error::Database(db_error) => {
                if let Some(code) = db_error.code() {
                    match code.as_ref() {
                        "23505" => DatabaseError::UniqueViolation(context.to_string()),
                        "23503" => DatabaseError::ConstraintViolation(format!(
                            "Foreign key constraint violation: {}",
                            context
                        )),
                        "23502" => DatabaseError::ConstraintViolation(format!(
                            "Not null constraint violation: {}",
                            context
                        )),
                        _ => DatabaseError::ConnectionError(sqlx::Error::Database(db_error)),
                    }
                } else {
                    DatabaseError::ConnectionError(sqlx::Error::Database(db_error))
                }
            }
            _ => DatabaseError::ConnectionError(error),
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        DatabaseError::from_sqlx_error(err, "Database operation failed")
    }
}
