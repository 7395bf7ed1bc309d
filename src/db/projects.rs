use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::Project;

pub struct NewProject<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub status: Option<&'a str>,
    pub team: &'a [String],
    pub workspace_name: &'a str,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

pub async fn create(pool: &PgPool, project: NewProject<'_>) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (title, description, priority, status, team,
                               workspace_name, start_date, due_date)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
    )
    .bind(project.title)
    .bind(project.description)
    .bind(project.priority)
    .bind(project.status)
    .bind(project.team)
    .bind(project.workspace_name)
    .bind(project.start_date)
    .bind(project.due_date)
    .fetch_one(pool)
    .await
}

pub async fn list_by_workspace(
    pool: &PgPool,
    workspace_name: &str,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT * FROM projects WHERE workspace_name = $1 ORDER BY created_at DESC",
    )
    .bind(workspace_name)
    .fetch_all(pool)
    .await
}
