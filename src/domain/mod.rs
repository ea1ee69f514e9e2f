// Domain layer - business logic with no HTTP concerns.

pub mod aggregates;
pub mod discovery;
pub mod skills;

use crate::db::errors::DatabaseError;
use crate::models::category::Category;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DatabaseError> for DomainError {
    fn from(e: DatabaseError) -> Self {
        match e {
            DatabaseError::NotFound(msg) => DomainError::NotFound(msg),
            other => DomainError::Database(other.to_string()),
        }
    }
}

pub(crate) fn parse_category(value: &str) -> Result<Category, DomainError> {
    Category::parse(value).ok_or_else(|| DomainError::Validation("Invalid category".to_string()))
}

pub use aggregates::{AggregateUpdater, PgAggregateUpdater};
