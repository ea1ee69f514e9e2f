pub mod api;
pub mod auth;
pub mod db;
pub mod domain;
pub mod models;

// Re-export commonly used types
pub use api::server::{create_app, AppState};
pub use db::errors::DatabaseError;
pub use domain::{AggregateUpdater, DomainError, PgAggregateUpdater};
pub use models::Category;
