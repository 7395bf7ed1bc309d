use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db;
use crate::error::AppError;
use crate::password;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateWorkspaceRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub owner_email: String,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
    pub password: String,
    /// Any remaining fields are stored on the workspace verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
pub struct UserWorkspacesQuery {
    pub email: Option<String>,
}

/// Creates the owner account, the workspace, and the owner's Admin
/// membership in one transaction; a failed precondition leaves no rows.
pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateWorkspaceRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let mut tx = state.pool.begin().await?;

    if db::workspaces::find_by_owner(&mut *tx, &req.owner_email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "Email already owns a workspace".to_string(),
        ));
    }

    if db::workspaces::find_by_name(&mut *tx, &req.workspace_name)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "Workspace name is already in use".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let user = db::users::create(
        &mut *tx,
        &req.owner_email,
        &pw_hash,
        Some(&req.first_name),
        Some(&req.last_name),
    )
    .await
    .map_err(conflict_on_unique("Email is already registered"))?;

    let workspace = db::workspaces::create(
        &mut *tx,
        &req.workspace_name,
        &req.owner_email,
        &serde_json::Value::Object(req.extra.clone()),
    )
    .await
    .map_err(conflict_on_unique("Workspace name is already in use"))?;

    db::memberships::create(
        &mut *tx,
        &req.owner_email,
        &req.workspace_name,
        Some(&req.first_name),
        Some(&req.last_name),
        &["Admin".to_string()],
    )
    .await?;

    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Workspace and user successfully created",
            "userId": user.id,
            "workspaceId": workspace.id,
        })),
    ))
}

pub async fn list_for_user(
    State(state): State<SharedState>,
    Query(query): Query<UserWorkspacesQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let email = query
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::BadRequest("Email query parameter is required".to_string()))?;

    let memberships = db::memberships::list_by_email(&state.pool, &email).await?;

    if memberships.is_empty() {
        return Err(AppError::NotFound("No workspaces found".to_string()));
    }

    let names: Vec<serde_json::Value> = memberships
        .iter()
        .map(|m| json!({ "workspaceName": m.workspace_name }))
        .collect();

    Ok(Json(json!({ "message": names })))
}

fn conflict_on_unique(message: &str) -> impl Fn(sqlx::Error) -> AppError + '_ {
    move |e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(message.to_string())
        }
        _ => AppError::Database(e),
    }
}
