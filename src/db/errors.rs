use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Query execution error: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Record not found: {0}")]
    NotFound(String),
}

impl DatabaseError {
    /// True for a Postgres unique constraint violation (code 23505). Used to
    /// detect a lost insert race on the shared skill aggregate.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::QueryError(e) => e
                .as_database_error()
                .is_some_and(|db| db.code().as_deref() == Some("23505")),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
