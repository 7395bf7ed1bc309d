use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::User;
use crate::routes::auth::MessageResponse;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct UpdateUserQuery {
    pub userid: Uuid,
}

#[derive(Deserialize)]
pub struct UpdateByEmailQuery {
    pub email: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<User>>, AppError> {
    let users = db::users::list_all(&state.pool).await?;
    if users.is_empty() {
        return Err(AppError::NotFound("No users found".to_string()));
    }
    Ok(Json(users))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = db::users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

pub async fn update(
    State(state): State<SharedState>,
    Query(query): Query<UpdateUserQuery>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let matched = db::users::update_fields(
        &state.pool,
        query.userid,
        req.email.as_deref(),
        req.first_name.as_deref(),
        req.last_name.as_deref(),
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Email is already in use".to_string())
        }
        _ => AppError::Database(e),
    })?;

    if matched == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "User updated successfully".to_string(),
    }))
}

pub async fn update_by_email(
    State(state): State<SharedState>,
    Query(query): Query<UpdateByEmailQuery>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let matched = db::users::update_fields_by_email(
        &state.pool,
        &query.email,
        req.first_name.as_deref(),
        req.last_name.as_deref(),
    )
    .await?;

    if matched == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "User updated successfully".to_string(),
    }))
}
