//! Shared skill aggregate bookkeeping.
//!
//! Mirroring a new skill into the aggregate store is a secondary write with
//! no transaction around it. The capability lives behind a trait so the
//! fire-and-forget implementation can later be replaced with a transactional
//! or queued one without touching the add-skill contract.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::db::shared_skills::{find_by_name_category, increment_usage, insert_shared_skill};
use crate::domain::DomainError;
use crate::models::rows::NewSkill;

#[async_trait]
pub trait AggregateUpdater: Send + Sync {
    /// Record one more user claiming (name, category): increment the
    /// existing aggregate or create it with a count of 1.
    async fn record_usage(&self, skill: &NewSkill) -> Result<(), DomainError>;
}

#[derive(Clone)]
pub struct PgAggregateUpdater {
    pool: PgPool,
}

impl PgAggregateUpdater {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AggregateUpdater for PgAggregateUpdater {
    #[tracing::instrument(skip(self, skill), fields(name = %skill.name, category = %skill.category))]
    async fn record_usage(&self, skill: &NewSkill) -> Result<(), DomainError> {
        if let Some(existing) = find_by_name_category(&self.pool, &skill.name, skill.category).await? {
            increment_usage(&self.pool, existing.id).await?;
            debug!("Incremented existing aggregate {}", existing.id);
            return Ok(());
        }

        match insert_shared_skill(&self.pool, skill).await {
            Ok(created) => {
                debug!("Created aggregate {} with usage count 1", created.id);
                Ok(())
            }
            // Lost the insert race: a concurrent writer created the
            // aggregate between our lookup and insert. Count this usage
            // against theirs.
            Err(e) if e.is_unique_violation() => {
                let existing = find_by_name_category(&self.pool, &skill.name, skill.category)
                    .await?
                    .ok_or_else(|| {
                        DomainError::Internal(
                            "aggregate missing after unique violation".to_string(),
                        )
                    })?;
                increment_usage(&self.pool, existing.id).await?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
