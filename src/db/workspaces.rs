use crate::models::Workspace;

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    workspace_name: &str,
    owner_email: &str,
    extra: &serde_json::Value,
) -> Result<Workspace, sqlx::Error> {
    sqlx::query_as::<_, Workspace>(
        "INSERT INTO workspaces (workspace_name, owner_email, extra)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(workspace_name)
    .bind(owner_email)
    .bind(extra)
    .fetch_one(executor)
    .await
}

pub async fn find_by_owner<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    owner_email: &str,
) -> Result<Option<Workspace>, sqlx::Error> {
    sqlx::query_as::<_, Workspace>("SELECT * FROM workspaces WHERE owner_email = $1")
        .bind(owner_email)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_name<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    workspace_name: &str,
) -> Result<Option<Workspace>, sqlx::Error> {
    sqlx::query_as::<_, Workspace>("SELECT * FROM workspaces WHERE workspace_name = $1")
        .bind(workspace_name)
        .fetch_optional(executor)
        .await
}
