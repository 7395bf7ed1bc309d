use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Workspace {
    pub id: Uuid,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
    pub owner_email: String,
    /// Additional request fields persisted verbatim at creation.
    pub extra: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
