use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Invite {
    pub id: Uuid,
    pub email: String,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
    pub roles: Vec<String>,
    pub extra: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
