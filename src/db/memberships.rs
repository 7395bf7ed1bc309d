use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Membership;

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    email: &str,
    workspace_name: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
    roles: &[String],
) -> Result<Membership, sqlx::Error> {
    sqlx::query_as::<_, Membership>(
        "INSERT INTO user_workspaces (email, workspace_name, first_name, last_name, roles)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(email)
    .bind(workspace_name)
    .bind(first_name)
    .bind(last_name)
    .bind(roles)
    .fetch_one(executor)
    .await
}

pub async fn find_for<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    email: &str,
    workspace_name: &str,
) -> Result<Option<Membership>, sqlx::Error> {
    sqlx::query_as::<_, Membership>(
        "SELECT * FROM user_workspaces WHERE email = $1 AND workspace_name = $2",
    )
    .bind(email)
    .bind(workspace_name)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_email(pool: &PgPool, email: &str) -> Result<Vec<Membership>, sqlx::Error> {
    sqlx::query_as::<_, Membership>(
        "SELECT * FROM user_workspaces WHERE email = $1 ORDER BY created_at DESC",
    )
    .bind(email)
    .fetch_all(pool)
    .await
}

pub async fn list_by_workspace(
    pool: &PgPool,
    workspace_name: &str,
) -> Result<Vec<Membership>, sqlx::Error> {
    sqlx::query_as::<_, Membership>(
        "SELECT * FROM user_workspaces WHERE workspace_name = $1 ORDER BY created_at DESC",
    )
    .bind(workspace_name)
    .fetch_all(pool)
    .await
}

/// Returns the number of matched rows.
pub async fn update_fields(
    pool: &PgPool,
    id: Uuid,
    first_name: Option<&str>,
    last_name: Option<&str>,
    roles: Option<&[String]>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE user_workspaces SET first_name = COALESCE($2, first_name),
                                    last_name = COALESCE($3, last_name),
                                    roles = COALESCE($4, roles)
         WHERE id = $1",
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(roles)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_for(
    pool: &PgPool,
    email: &str,
    workspace_name: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM user_workspaces WHERE email = $1 AND workspace_name = $2",
    )
    .bind(email)
    .bind(workspace_name)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
