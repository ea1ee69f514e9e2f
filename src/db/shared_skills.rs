//! Shared skill aggregate store: per-(name, category) usage counters.
//!
//! Uniqueness is enforced by a unique index on (LOWER(name), category), so
//! two categories keep independent counters for the same name.

use sqlx::PgPool;
use tracing::debug;

use crate::db::errors::DatabaseError;
use crate::models::category::Category;
use crate::models::rows::{NewSkill, SharedSkillRow};

/// Case-insensitive lookup on name, exact match on category. The comparison
/// is LOWER() against a bound parameter; no pattern is built from the
/// user-supplied name.
#[tracing::instrument(skip(pool), fields(category = %category))]
pub async fn find_by_name_category(
    pool: &PgPool,
    name: &str,
    category: Category,
) -> Result<Option<SharedSkillRow>, DatabaseError> {
    let row = sqlx::query_as::<_, SharedSkillRow>(
        r#"
        SELECT id, name, category, description, added_by, usage_count,
               created_at, updated_at
        FROM shared_skill
        WHERE LOWER(name) = LOWER($1)
        AND category = $2
        "#,
    )
    .bind(name)
    .bind(category.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Increment the usage counter of an existing aggregate.
#[tracing::instrument(skip(pool))]
pub async fn increment_usage(pool: &PgPool, id: i64) -> Result<(), DatabaseError> {
    let result = sqlx::query(
        r#"
        UPDATE shared_skill
        SET usage_count = usage_count + 1, updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound(format!("shared skill {id}")));
    }

    debug!("Incremented usage count for shared skill {}", id);
    Ok(())
}

/// Create a new aggregate with usage_count = 1. The first contributor's
/// casing and description are the ones preserved.
#[tracing::instrument(skip(pool, skill), fields(category = %skill.category))]
pub async fn insert_shared_skill(
    pool: &PgPool,
    skill: &NewSkill,
) -> Result<SharedSkillRow, DatabaseError> {
    let row = sqlx::query_as::<_, SharedSkillRow>(
        r#"
        INSERT INTO shared_skill (name, category, description, added_by, usage_count)
        VALUES ($1, $2, $3, $4, 1)
        RETURNING id, name, category, description, added_by, usage_count,
                  created_at, updated_at
        "#,
    )
    .bind(&skill.name)
    .bind(skill.category.as_str())
    .bind(&skill.description)
    .bind(skill.owner_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Aggregates for one category, most used first, name as the stable
/// tie-break for equal popularity.
#[tracing::instrument(skip(pool), fields(category = %category))]
pub async fn list_by_category(
    pool: &PgPool,
    category: Category,
) -> Result<Vec<SharedSkillRow>, DatabaseError> {
    let rows = sqlx::query_as::<_, SharedSkillRow>(
        r#"
        SELECT id, name, category, description, added_by, usage_count,
               created_at, updated_at
        FROM shared_skill
        WHERE category = $1
        ORDER BY usage_count DESC, name ASC
        "#,
    )
    .bind(category.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
