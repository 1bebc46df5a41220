//! PostgreSQL-backed [`UserStore`].

use super::UserStore;
use crate::error::StoreError;
use crate::model::{NewUser, User, UserChanges};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const USERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL
    )
"#;

const SELECT_ALL: &str = "SELECT id, name, email FROM users ORDER BY id";
const SELECT_ONE: &str = "SELECT id, name, email FROM users WHERE id = $1 LIMIT 1";
const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email";
const UPDATE: &str = "UPDATE users SET name = COALESCE($2, name), email = COALESCE($3, email) \
                      WHERE id = $1 RETURNING id, name, email";
const DELETE: &str = "DELETE FROM users WHERE id = $1 RETURNING id, name, email";

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create the `users` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        tracing::debug!(sql = %USERS_DDL.trim(), "ddl");
        sqlx::query(USERS_DDL).execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection; waits for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Translate the "no row returned" outcome of a targeted write into `NotFound`.
fn not_found_for(id: i32) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |e| match e {
        sqlx::Error::RowNotFound => StoreError::NotFound(id),
        other => StoreError::Database(other),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let users = sqlx::query_as::<_, User>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn find(&self, id: i32) -> Result<Option<User>, StoreError> {
        tracing::debug!(sql = %SELECT_ONE, id, "query");
        let user = sqlx::query_as::<_, User>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        tracing::debug!(sql = %INSERT, params = ?user, "query");
        let created = sqlx::query_as::<_, User>(INSERT)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, StoreError> {
        tracing::debug!(sql = %UPDATE, id, params = ?changes, "query");
        sqlx::query_as::<_, User>(UPDATE)
            .bind(id)
            .bind(changes.name)
            .bind(changes.email)
            .fetch_one(&self.pool)
            .await
            .map_err(not_found_for(id))
    }

    async fn delete(&self, id: i32) -> Result<User, StoreError> {
        tracing::debug!(sql = %DELETE, id, "query");
        sqlx::query_as::<_, User>(DELETE)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(not_found_for(id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Connect to the server's `postgres` database and create the database named in
/// `database_url` when it is missing. A no-op when the URL names no database or
/// already targets `postgres`.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let Some((admin, db_name)) = admin_target(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` maintenance database on the same server, plus the
/// database name `database_url` targets. `None` when there is nothing to create.
fn admin_target(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, StoreError> {
    let options = PgConnectOptions::from_str(database_url)?;
    let db_name = match options.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((options.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
