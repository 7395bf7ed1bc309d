use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Task;

pub struct NewTask<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub status: Option<&'a str>,
    pub assignees: &'a [String],
    pub email: &'a str,
    pub workspace_name: &'a str,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

pub async fn create(pool: &PgPool, task: NewTask<'_>) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (title, description, priority, status, assignees,
                            email, workspace_name, start_date, due_date)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
    )
    .bind(task.title)
    .bind(task.description)
    .bind(task.priority)
    .bind(task.status)
    .bind(task.assignees)
    .bind(task.email)
    .bind(task.workspace_name)
    .bind(task.start_date)
    .bind(task.due_date)
    .fetch_one(pool)
    .await
}

pub async fn list_for(
    pool: &PgPool,
    email: &str,
    workspace_name: &str,
) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT * FROM tasks WHERE email = $1 AND workspace_name = $2
         ORDER BY created_at DESC",
    )
    .bind(email)
    .bind(workspace_name)
    .fetch_all(pool)
    .await
}

/// Returns the number of matched rows.
pub async fn set_status(pool: &PgPool, id: Uuid, status: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE tasks SET status = $2 WHERE id = $1")
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Deletes only when the task belongs to the given workspace.
pub async fn delete_scoped(
    pool: &PgPool,
    id: Uuid,
    workspace_name: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND workspace_name = $2")
        .bind(id)
        .bind(workspace_name)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
