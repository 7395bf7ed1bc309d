use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::AppError;
use crate::models::User;
use crate::password;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
}

/// Signup is invite-gated: a user may only join a workspace that holds an
/// invite for their email, whether or not their account already exists.
pub async fn signup(
    State(state): State<SharedState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let existing = db::users::find_by_email(&state.pool, &req.email).await?;

    if let Some(user) = existing {
        let invite = db::invites::find_for(&state.pool, &req.email, &req.workspace_name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    "User already exists, but no invite found. Please contact the workspace owner."
                        .to_string(),
                )
            })?;

        let member = db::memberships::find_for(&state.pool, &req.email, &req.workspace_name).await?;
        if member.is_some() {
            return Err(AppError::Conflict(
                "User already exists in the workspace. Please log in.".to_string(),
            ));
        }

        db::memberships::create(
            &state.pool,
            &req.email,
            &req.workspace_name,
            user.first_name.as_deref(),
            user.last_name.as_deref(),
            &invite.roles,
        )
        .await?;

        return Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "User successfully added to workspace.".to_string(),
            }),
        ));
    }

    let invite = db::invites::find_for(&state.pool, &req.email, &req.workspace_name)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(
                "User does not exist. Please contact the workspace owner to invite you."
                    .to_string(),
            )
        })?;

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    // Account row and membership row land together or not at all.
    let mut tx = state.pool.begin().await?;

    db::users::create(
        &mut *tx,
        &req.email,
        &pw_hash,
        req.first_name.as_deref(),
        req.last_name.as_deref(),
    )
    .await?;

    db::memberships::create(
        &mut *tx,
        &req.email,
        &req.workspace_name,
        req.first_name.as_deref(),
        req.last_name.as_deref(),
        &invite.roles,
    )
    .await?;

    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User successfully created and added to workspace.".to_string(),
        }),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid email".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;

    if !valid {
        return Err(AppError::BadRequest("Invalid password".to_string()));
    }

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user,
    }))
}
