//! Team member handlers.

use crate::error::{AppError, StoreError};
use crate::extractors::JsonBody;
use crate::service::{parse_id, CreateTeamMemberRequest, RequestValidator, UpdateTeamMemberRequest};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

const MEMBER_NOT_FOUND: &str = "Team member not found";
const MEMBER_EXISTS: &str = "User is already a member of this team";

pub async fn create_team_member(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateTeamMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_member = RequestValidator::create_team_member(body)?;
    let member = state.members.create(new_member).await.map_err(|e| match e {
        StoreError::UniqueViolation => AppError::Conflict(MEMBER_EXISTS.into()),
        other => AppError::internal("Failed to create team member", other),
    })?;
    tracing::info!(member_id = %member.id, team_id = %member.team_id, "team member created");
    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn remove_team_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("memberId", &member_id)?;
    let removed = state
        .members
        .remove(id)
        .await
        .map_err(|e| AppError::internal("Failed to remove team member", e))?
        .ok_or_else(|| AppError::NotFound(MEMBER_NOT_FOUND.into()))?;
    tracing::info!(member_id = %id, "team member removed");
    Ok(Json(removed))
}

pub async fn update_team_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    JsonBody(body): JsonBody<UpdateTeamMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("memberId", &member_id)?;
    let patch = RequestValidator::update_team_member(body)?;
    let member = state.members.update(id, &patch).await.map_err(|e| match e {
        StoreError::NotFound => AppError::NotFound(MEMBER_NOT_FOUND.into()),
        StoreError::UniqueViolation => AppError::Conflict(MEMBER_EXISTS.into()),
        other => AppError::internal("Failed to update team member", other),
    })?;
    Ok(Json(member))
}

pub async fn get_team_members_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let team_id = parse_id("teamId", &team_id)?;
    let members = state
        .members
        .list_by_team(team_id)
        .await
        .map_err(|e| AppError::internal("Failed to fetch team members", e))?;
    Ok(Json(members))
}
