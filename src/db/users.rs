use sqlx::PgPool;
use uuid::Uuid;

use crate::models::User;

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    email: &str,
    password_hash: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password_hash, first_name, last_name)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(email)
    .bind(password_hash)
    .bind(first_name)
    .bind(last_name)
    .fetch_one(executor)
    .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Merge the provided fields into the user row; absent fields keep their
/// stored value. Returns the number of matched rows.
pub async fn update_fields(
    pool: &PgPool,
    id: Uuid,
    email: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users SET email = COALESCE($2, email),
                          first_name = COALESCE($3, first_name),
                          last_name = COALESCE($4, last_name)
         WHERE id = $1",
    )
    .bind(id)
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn update_fields_by_email(
    pool: &PgPool,
    email: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users SET first_name = COALESCE($2, first_name),
                          last_name = COALESCE($3, last_name)
         WHERE email = $1",
    )
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
