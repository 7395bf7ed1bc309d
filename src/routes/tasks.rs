use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::db;
use crate::db::tasks::NewTask;
use crate::error::AppError;
use crate::routes::auth::MessageResponse;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AddTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub assignees: Vec<String>,
    pub email: String,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct GetTasksRequest {
    pub email: String,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
}

#[derive(Deserialize)]
pub struct DeleteTaskRequest {
    pub id: Uuid,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
}

#[derive(Deserialize)]
pub struct MoveTaskRequest {
    pub id: Uuid,
    /// Target status column, e.g. "To Do" / "In Progress" / "Done".
    pub selection: String,
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<AddTaskRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let task = db::tasks::create(
        &state.pool,
        NewTask {
            title: &req.title,
            description: req.description.as_deref(),
            priority: req.priority.as_deref(),
            status: req.status.as_deref(),
            assignees: &req.assignees,
            email: &req.email,
            workspace_name: &req.workspace_name,
            start_date: req.start_date,
            due_date: req.due_date,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Task successfully created",
            "taskId": task.id,
        })),
    ))
}

pub async fn list(
    State(state): State<SharedState>,
    Json(req): Json<GetTasksRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tasks = db::tasks::list_for(&state.pool, &req.email, &req.workspace_name).await?;
    Ok(Json(json!({ "message": tasks })))
}

pub async fn remove(
    State(state): State<SharedState>,
    Json(req): Json<DeleteTaskRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = db::tasks::delete_scoped(&state.pool, req.id, &req.workspace_name).await?;

    if deleted == 0 {
        return Err(AppError::NotFound("Task not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

pub async fn move_status(
    State(state): State<SharedState>,
    Json(req): Json<MoveTaskRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let matched = db::tasks::set_status(&state.pool, req.id, &req.selection).await?;

    if matched == 0 {
        return Err(AppError::NotFound("Task not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Task moved successfully".to_string(),
    }))
}
