// Thin handlers: parse and validate HTTP input, call the domain layer,
// serialize the result.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::auth::AuthOwner;
use crate::domain;
use crate::models::api::{
    CreateSkillRequest, PublicSkill, SharedSkillsResponse, SkillResponse, TeacherSkill,
    UsersWithSkillResponse,
};

/// POST /skills (owner-authenticated)
#[tracing::instrument(skip(state, body), fields(owner_id = owner.0))]
pub async fn create_skill(
    State(state): State<AppState>,
    owner: AuthOwner,
    body: Result<Json<CreateSkillRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SkillResponse>)> {
    info!("Processing create skill request");

    // An absent or unparseable body counts as empty, so it fails the
    // name/category check with the canonical message instead of a
    // plain-text deserialization error.
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let row = domain::skills::add_skill(&state.pool, state.aggregates.as_ref(), owner.0, req).await?;

    Ok((StatusCode::CREATED, Json(SkillResponse::from(row))))
}

/// GET /skills/mine (owner-authenticated)
#[tracing::instrument(skip(state), fields(owner_id = owner.0))]
pub async fn list_my_skills(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> ApiResult<Json<Vec<PublicSkill>>> {
    let skills = domain::skills::list_skills_for_owner(&state.pool, owner.0).await?;
    Ok(Json(skills))
}

/// GET /skills/category/{category} (public)
#[tracing::instrument(skip(state))]
pub async fn list_skills_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<SkillResponse>>> {
    let skills = domain::skills::list_skills_by_category(&state.pool, &category).await?;
    Ok(Json(skills))
}

/// GET /skills/teachers/{skillName} (public)
#[tracing::instrument(skip(state))]
pub async fn list_teachers(
    State(state): State<AppState>,
    Path(skill_name): Path<String>,
) -> ApiResult<Json<Vec<TeacherSkill>>> {
    let teachers = domain::skills::list_teachers_for_skill(&state.pool, &skill_name).await?;
    Ok(Json(teachers))
}

/// GET /skills/shared/{category} (public)
#[tracing::instrument(skip(state))]
pub async fn list_shared_skills(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<SharedSkillsResponse>> {
    let response = domain::discovery::list_shared_by_category(&state.pool, &category).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersQuery {
    pub skill_name: Option<String>,
    pub category: Option<String>,
}

/// GET /skills/users?skillName=&category= (public)
#[tracing::instrument(skip(state))]
pub async fn list_users_with_skill(
    State(state): State<AppState>,
    Query(params): Query<UsersQuery>,
) -> ApiResult<Json<UsersWithSkillResponse>> {
    let skill_name = params.skill_name.as_deref().unwrap_or("").trim();
    let category = params.category.as_deref().unwrap_or("").trim();

    if skill_name.is_empty() || category.is_empty() {
        return Err(ApiError::Validation(
            "skillName and category are required".to_string(),
        ));
    }

    let response =
        domain::discovery::list_users_with_skill(&state.pool, skill_name, category).await?;
    Ok(Json(response))
}
