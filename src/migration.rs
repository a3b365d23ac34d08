//! Database bootstrap: create the target database and the frameworks table if missing.

use crate::error::{AppError, ConfigError};
use crate::sql::{qualified_table, quoted};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// DDL for the frameworks table in `schema`. Idempotent.
pub fn frameworks_table_ddl(schema: &str) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {} (
    "id" BIGSERIAL PRIMARY KEY,
    "name" VARCHAR(30) NOT NULL,
    "versions" TEXT[] NOT NULL,
    "deprecation_date" DATE NOT NULL,
    "hype_level" INTEGER NOT NULL
)"#,
        qualified_table(schema)
    )
}

/// Create `schema` and the frameworks table inside it when they do not exist yet.
pub async fn ensure_frameworks_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
        .execute(pool)
        .await?;
    sqlx::query(&frameworks_table_ddl(schema)).execute(pool).await?;
    tracing::info!(schema, "frameworks table ready");
    Ok(())
}

/// Connect to the `postgres` maintenance database on the same server and create the
/// database named in `database_url` if it is missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|_| invalid_database_url(database_url))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn invalid_database_url(url: &str) -> AppError {
    ConfigError::Invalid {
        key: "DATABASE_URL",
        value: url.to_string(),
    }
    .into()
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| invalid_database_url(url))?;
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_name_is_split_from_url() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/frameworks").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "frameworks");
    }

    #[test]
    fn query_string_is_kept_on_admin_url() {
        let (admin, name) =
            parse_db_name_from_url("postgres://localhost/frameworks?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "frameworks");
    }

    #[test]
    fn url_without_path_is_rejected() {
        assert!(matches!(
            parse_db_name_from_url("postgres://localhost"),
            Err(AppError::Config(ConfigError::Invalid { key: "DATABASE_URL", .. }))
        ));
    }

    #[test]
    fn ddl_targets_schema_table() {
        let ddl = frameworks_table_ddl("catalog");
        assert!(ddl.starts_with(r#"CREATE TABLE IF NOT EXISTS "catalog"."frameworks" ("#));
        assert!(ddl.contains(r#""name" VARCHAR(30) NOT NULL"#));
        assert!(ddl.contains(r#""versions" TEXT[] NOT NULL"#));
    }
}
