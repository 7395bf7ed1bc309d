use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assignees: Vec<String>,
    pub email: String,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
