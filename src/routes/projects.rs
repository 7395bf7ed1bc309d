use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::db;
use crate::db::projects::NewProject;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AddProjectRequest {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub team: Vec<String>,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct GetProjectsRequest {
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<AddProjectRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let project = db::projects::create(
        &state.pool,
        NewProject {
            title: &req.title,
            description: req.description.as_deref(),
            priority: req.priority.as_deref(),
            status: req.status.as_deref(),
            team: &req.team,
            workspace_name: &req.workspace_name,
            start_date: req.start_date,
            due_date: req.due_date,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Project successfully created",
            "projectId": project.id,
        })),
    ))
}

pub async fn list(
    State(state): State<SharedState>,
    Json(req): Json<GetProjectsRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let projects = db::projects::list_by_workspace(&state.pool, &req.workspace_name).await?;
    Ok(Json(json!({ "message": projects })))
}
