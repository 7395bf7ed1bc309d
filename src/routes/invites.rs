use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::routes::auth::MessageResponse;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct InviteRequest {
    pub email: String,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Any remaining fields are stored on the invite verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<InviteRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let existing = db::invites::find_for(&state.pool, &req.email, &req.workspace_name).await?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "User is already invited to {}.",
            req.workspace_name
        )));
    }

    db::invites::create(
        &state.pool,
        &req.email,
        &req.workspace_name,
        &req.roles,
        &serde_json::Value::Object(req.extra.clone()),
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("User is already invited to {}.", req.workspace_name))
        }
        _ => AppError::Database(e),
    })?;

    // Delivery is fire-and-forget; a failed send never fails the request.
    if let Some(mailer) = state.mailer.clone() {
        let email = req.email.clone();
        let workspace_name = req.workspace_name.clone();
        let invite_link = format!(
            "{}/signup?workspace={}",
            state.config.base_url, req.workspace_name
        );
        tokio::spawn(async move {
            if let Err(e) = mailer
                .send_invitation(&email, &workspace_name, &invite_link)
                .await
            {
                tracing::error!("Failed to send invitation email: {e}");
            }
        });
    } else {
        tracing::warn!("SMTP not configured; invitation email to {} skipped", req.email);
    }

    Ok(Json(MessageResponse {
        message: format!("User successfully invited to {}.", req.workspace_name),
    }))
}
