use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::models::category::Category;

/// skill table: one record per (owner, claimed skill)
#[derive(Debug, Clone, FromRow)]
pub struct SkillRow {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub experience: String,
    pub proof_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// shared_skill table: per-(name, category) usage aggregate
#[derive(Debug, Clone, FromRow)]
pub struct SharedSkillRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub added_by: i64,
    pub usage_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// skill joined with the owner's public identity from app_user
/// (app_user is owned by the auth service; read-only here)
#[derive(Debug, Clone, FromRow)]
pub struct SkillWithOwnerRow {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub experience: String,
    pub proof_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_avatar_url: String,
}

/// Validated insert payload for the skill table.
#[derive(Debug, Clone)]
pub struct NewSkill {
    pub owner_id: i64,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub experience: String,
    pub proof_url: String,
}
