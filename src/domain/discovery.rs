//! Discovery use cases: shared skill suggestions per category and the
//! de-duplicated list of users offering a given skill.

use std::collections::HashSet;

use sqlx::PgPool;

use crate::db::{shared_skills, skills};
use crate::domain::{parse_category, DomainError};
use crate::models::api::{
    SharedSkillSuggestion, SharedSkillsResponse, SkillUser, UsersWithSkillResponse,
};
use crate::models::rows::SkillWithOwnerRow;

/// Aggregate suggestions for one category, most used first.
#[tracing::instrument(skip(pool))]
pub async fn list_shared_by_category(
    pool: &PgPool,
    category: &str,
) -> Result<SharedSkillsResponse, DomainError> {
    let category = parse_category(category)?;
    let rows = shared_skills::list_by_category(pool, category).await?;

    let skills = rows
        .into_iter()
        .map(|r| SharedSkillSuggestion {
            name: r.name,
            description: r.description,
            usage_count: r.usage_count,
        })
        .collect();

    Ok(SharedSkillsResponse { skills })
}

/// Users offering a skill matching (name case-insensitively, category
/// exactly), one entry per owner.
#[tracing::instrument(skip(pool))]
pub async fn list_users_with_skill(
    pool: &PgPool,
    skill_name: &str,
    category: &str,
) -> Result<UsersWithSkillResponse, DomainError> {
    let parsed_category = parse_category(category)?;
    let rows = skills::list_by_name_category_with_owner(pool, skill_name, parsed_category).await?;
    let users = dedup_users_by_owner(rows);
    let total_users = users.len();

    Ok(UsersWithSkillResponse {
        skill_name: skill_name.to_string(),
        category: parsed_category,
        users,
        total_users,
    })
}

/// Collapse matching skill rows to one entry per owner. Rows arrive oldest
/// first, so the first record an owner created supplies the description and
/// experience shown for them.
fn dedup_users_by_owner(rows: Vec<SkillWithOwnerRow>) -> Vec<SkillUser> {
    let mut seen = HashSet::new();
    let mut users = Vec::new();

    for row in rows {
        if seen.insert(row.owner_id) {
            users.push(SkillUser {
                id: row.owner_id,
                name: row.owner_name,
                email: row.owner_email,
                avatar_url: row.owner_avatar_url,
                description: row.description,
                experience: row.experience,
            });
        }
    }

    users
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row(owner_id: i64, description: &str, minute: u32) -> SkillWithOwnerRow {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap();
        SkillWithOwnerRow {
            id: owner_id * 100 + i64::from(minute),
            owner_id,
            name: "Python".to_string(),
            category: "Technical".to_string(),
            description: description.to_string(),
            experience: format!("{minute} years"),
            proof_url: String::new(),
            created_at: at,
            updated_at: at,
            owner_name: format!("user-{owner_id}"),
            owner_email: format!("user-{owner_id}@example.com"),
            owner_avatar_url: String::new(),
        }
    }

    #[test]
    fn duplicate_owner_appears_once() {
        let users = dedup_users_by_owner(vec![row(1, "first", 0), row(1, "second", 1)]);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);
    }

    #[test]
    fn first_record_supplies_description_and_experience() {
        let users = dedup_users_by_owner(vec![row(1, "first", 0), row(1, "second", 1)]);
        assert_eq!(users[0].description, "first");
        assert_eq!(users[0].experience, "0 years");
    }

    #[test]
    fn distinct_owners_all_listed_in_row_order() {
        let users = dedup_users_by_owner(vec![row(3, "c", 0), row(1, "a", 1), row(2, "b", 2)]);
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(dedup_users_by_owner(Vec::new()).is_empty());
    }
}
