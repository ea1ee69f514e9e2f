//! Skill catalog use cases: add a skill, list an owner's skills, list a
//! category, list the teachers of a named skill.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::db::skills::{insert_skill, list_by_category, list_by_name_with_owner, list_by_owner};
use crate::domain::aggregates::AggregateUpdater;
use crate::domain::{parse_category, DomainError};
use crate::models::api::{CreateSkillRequest, PublicSkill, SkillResponse, TeacherSkill};
use crate::models::rows::{NewSkill, SkillRow};

/// Check and normalize a create request. Name and category must be present
/// and non-blank; the name is trimmed; the category must be one of the
/// canonical values.
pub fn validate_new_skill(
    owner_id: i64,
    req: &CreateSkillRequest,
) -> Result<NewSkill, DomainError> {
    let name = req.name.as_deref().unwrap_or("").trim();
    let category = req.category.as_deref().unwrap_or("").trim();

    if name.is_empty() || category.is_empty() {
        return Err(DomainError::Validation(
            "Name and category are required".to_string(),
        ));
    }

    let category = parse_category(category)?;

    Ok(NewSkill {
        owner_id,
        name: name.to_string(),
        category,
        description: req.description.clone().unwrap_or_default(),
        experience: req.experience.clone().unwrap_or_default(),
        proof_url: req.proof_url.clone().unwrap_or_default(),
    })
}

/// Add a skill for the calling owner and mirror it into the shared
/// aggregate store.
///
/// The aggregate step is best-effort: its failure is logged and the skill is
/// still reported as created.
#[tracing::instrument(skip(pool, aggregates, req), fields(owner_id = owner_id))]
pub async fn add_skill(
    pool: &PgPool,
    aggregates: &dyn AggregateUpdater,
    owner_id: i64,
    req: CreateSkillRequest,
) -> Result<SkillRow, DomainError> {
    let new_skill = validate_new_skill(owner_id, &req)?;

    let row = insert_skill(pool, &new_skill).await?;
    info!(skill_id = row.id, "Skill created");

    if let Err(e) = aggregates.record_usage(&new_skill).await {
        warn!(
            error = %e,
            name = %new_skill.name,
            category = %new_skill.category,
            "Shared skill bookkeeping failed; skill creation unaffected"
        );
    }

    Ok(row)
}

/// All skills of one owner, newest first, public projection.
#[tracing::instrument(skip(pool))]
pub async fn list_skills_for_owner(
    pool: &PgPool,
    owner_id: i64,
) -> Result<Vec<PublicSkill>, DomainError> {
    let rows = list_by_owner(pool, owner_id).await?;
    Ok(rows.into_iter().map(PublicSkill::from).collect())
}

/// All skills in one category, newest first, full shape.
#[tracing::instrument(skip(pool))]
pub async fn list_skills_by_category(
    pool: &PgPool,
    category: &str,
) -> Result<Vec<SkillResponse>, DomainError> {
    let category = parse_category(category)?;
    let rows = list_by_category(pool, category).await?;
    Ok(rows.into_iter().map(SkillResponse::from).collect())
}

/// Skills exactly matching a name, enriched with the owning teacher's
/// public identity, newest first.
#[tracing::instrument(skip(pool))]
pub async fn list_teachers_for_skill(
    pool: &PgPool,
    skill_name: &str,
) -> Result<Vec<TeacherSkill>, DomainError> {
    let rows = list_by_name_with_owner(pool, skill_name).await?;
    Ok(rows.into_iter().map(TeacherSkill::from).collect())
}
