use sqlx::PgPool;

use crate::models::Invite;

pub async fn create(
    pool: &PgPool,
    email: &str,
    workspace_name: &str,
    roles: &[String],
    extra: &serde_json::Value,
) -> Result<Invite, sqlx::Error> {
    sqlx::query_as::<_, Invite>(
        "INSERT INTO invites (email, workspace_name, roles, extra)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(email)
    .bind(workspace_name)
    .bind(roles)
    .bind(extra)
    .fetch_one(pool)
    .await
}

pub async fn find_for<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    email: &str,
    workspace_name: &str,
) -> Result<Option<Invite>, sqlx::Error> {
    sqlx::query_as::<_, Invite>(
        "SELECT * FROM invites WHERE email = $1 AND workspace_name = $2",
    )
    .bind(email)
    .bind(workspace_name)
    .fetch_optional(executor)
    .await
}
