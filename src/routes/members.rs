use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::routes::auth::MessageResponse;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct TeamMembersRequest {
    /// Workspace name; the frontend sends it as `org`.
    pub org: String,
}

#[derive(Deserialize)]
pub struct EditMemberRequest {
    pub id: Uuid,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteMemberRequest {
    pub email: String,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
}

pub async fn list(
    State(state): State<SharedState>,
    Json(req): Json<TeamMembersRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let members = db::memberships::list_by_workspace(&state.pool, &req.org).await?;

    if members.is_empty() {
        return Err(AppError::NotFound("Team members not found".to_string()));
    }

    Ok(Json(json!({ "teamMembers": members })))
}

pub async fn edit(
    State(state): State<SharedState>,
    Json(req): Json<EditMemberRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let roles = req.role.map(|r| vec![r]);

    let matched = db::memberships::update_fields(
        &state.pool,
        req.id,
        req.first_name.as_deref(),
        req.last_name.as_deref(),
        roles.as_deref(),
    )
    .await?;

    if matched == 0 {
        return Err(AppError::NotFound("Member not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Member updated successfully".to_string(),
    }))
}

/// Removes the membership only; the user account row survives.
pub async fn remove(
    State(state): State<SharedState>,
    Json(req): Json<DeleteMemberRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted =
        db::memberships::delete_for(&state.pool, &req.email, &req.workspace_name).await?;

    if deleted == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
