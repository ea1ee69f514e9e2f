use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::category::Category;
use crate::models::rows::{SkillRow, SkillWithOwnerRow};

/// Body of POST /skills. Required fields are optional here so that missing
/// values produce the catalog's own validation message rather than a
/// deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub experience: Option<String>,
    pub proof_url: Option<String>,
}

/// Full skill record as returned by create and category listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
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

impl From<SkillRow> for SkillResponse {
    fn from(row: SkillRow) -> Self {
        SkillResponse {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            category: row.category,
            description: row.description,
            experience: row.experience,
            proof_url: row.proof_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Public projection of a skill for GET /skills/mine (internal fields omitted).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSkill {
    pub name: String,
    pub category: String,
    pub description: String,
    pub experience: String,
    pub proof_url: String,
}

impl From<SkillRow> for PublicSkill {
    fn from(row: SkillRow) -> Self {
        PublicSkill {
            name: row.name,
            category: row.category,
            description: row.description,
            experience: row.experience,
            proof_url: row.proof_url,
        }
    }
}

/// Owner identity attached to teacher listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerIdentity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

/// Skill enriched with the owning teacher for GET /skills/teachers/{skillName}.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSkill {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub experience: String,
    pub proof_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: OwnerIdentity,
}

impl From<SkillWithOwnerRow> for TeacherSkill {
    fn from(row: SkillWithOwnerRow) -> Self {
        TeacherSkill {
            id: row.id,
            name: row.name,
            category: row.category,
            description: row.description,
            experience: row.experience,
            proof_url: row.proof_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
            owner: OwnerIdentity {
                id: row.owner_id,
                name: row.owner_name,
                email: row.owner_email,
                avatar_url: row.owner_avatar_url,
            },
        }
    }
}

/// Suggestion entry for GET /skills/shared/{category}.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSkillSuggestion {
    pub name: String,
    pub description: String,
    pub usage_count: i32,
}

#[derive(Debug, Serialize)]
pub struct SharedSkillsResponse {
    pub skills: Vec<SharedSkillSuggestion>,
}

/// De-duplicated user entry for GET /skills/users.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub description: String,
    pub experience: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersWithSkillResponse {
    pub skill_name: String,
    pub category: Category,
    pub users: Vec<SkillUser>,
    pub total_users: usize,
}
