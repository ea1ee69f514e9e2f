//! Skill catalog store: one row per (owner, claimed skill).

use sqlx::PgPool;
use tracing::debug;

use crate::db::errors::DatabaseError;
use crate::models::category::Category;
use crate::models::rows::{NewSkill, SkillRow, SkillWithOwnerRow};

/// Persist a new skill and return the stored record.
#[tracing::instrument(skip(pool, skill), fields(owner_id = skill.owner_id, category = %skill.category))]
pub async fn insert_skill(pool: &PgPool, skill: &NewSkill) -> Result<SkillRow, DatabaseError> {
    debug!("Inserting skill '{}'", skill.name);

    let row = sqlx::query_as::<_, SkillRow>(
        r#"
        INSERT INTO skill (owner_id, name, category, description, experience, proof_url)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, owner_id, name, category, description, experience, proof_url,
                  created_at, updated_at
        "#,
    )
    .bind(skill.owner_id)
    .bind(&skill.name)
    .bind(skill.category.as_str())
    .bind(&skill.description)
    .bind(&skill.experience)
    .bind(&skill.proof_url)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// All skills for one owner, newest first.
#[tracing::instrument(skip(pool))]
pub async fn list_by_owner(pool: &PgPool, owner_id: i64) -> Result<Vec<SkillRow>, DatabaseError> {
    let rows = sqlx::query_as::<_, SkillRow>(
        r#"
        SELECT id, owner_id, name, category, description, experience, proof_url,
               created_at, updated_at
        FROM skill
        WHERE owner_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// All skills in one category, newest first.
#[tracing::instrument(skip(pool), fields(category = %category))]
pub async fn list_by_category(
    pool: &PgPool,
    category: Category,
) -> Result<Vec<SkillRow>, DatabaseError> {
    let rows = sqlx::query_as::<_, SkillRow>(
        r#"
        SELECT id, owner_id, name, category, description, experience, proof_url,
               created_at, updated_at
        FROM skill
        WHERE category = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(category.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Skills whose name matches exactly, joined with the owner's public
/// identity, newest first.
#[tracing::instrument(skip(pool))]
pub async fn list_by_name_with_owner(
    pool: &PgPool,
    name: &str,
) -> Result<Vec<SkillWithOwnerRow>, DatabaseError> {
    let rows = sqlx::query_as::<_, SkillWithOwnerRow>(
        r#"
        SELECT s.id, s.owner_id, s.name, s.category, s.description, s.experience,
               s.proof_url, s.created_at, s.updated_at,
               u.display_name AS owner_name,
               u.email AS owner_email,
               u.avatar_url AS owner_avatar_url
        FROM skill s
        JOIN app_user u ON u.id = s.owner_id
        WHERE s.name = $1
        ORDER BY s.created_at DESC
        "#,
    )
    .bind(name)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Skills matching a name case-insensitively within one category, joined
/// with the owner's public identity. The name is a bound parameter compared
/// with LOWER(), never interpolated into a pattern, so user input cannot
/// carry matching metacharacters.
///
/// Oldest first: when an owner listed the same skill twice, the first record
/// they created supplies the description shown for them.
#[tracing::instrument(skip(pool), fields(category = %category))]
pub async fn list_by_name_category_with_owner(
    pool: &PgPool,
    name: &str,
    category: Category,
) -> Result<Vec<SkillWithOwnerRow>, DatabaseError> {
    let rows = sqlx::query_as::<_, SkillWithOwnerRow>(
        r#"
        SELECT s.id, s.owner_id, s.name, s.category, s.description, s.experience,
               s.proof_url, s.created_at, s.updated_at,
               u.display_name AS owner_name,
               u.email AS owner_email,
               u.avatar_url AS owner_avatar_url
        FROM skill s
        JOIN app_user u ON u.id = s.owner_id
        WHERE LOWER(s.name) = LOWER($1)
        AND s.category = $2
        ORDER BY s.created_at ASC
        "#,
    )
    .bind(name)
    .bind(category.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
