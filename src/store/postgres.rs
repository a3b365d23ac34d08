//! PostgreSQL-backed store. Every operation is one parameterized statement.

use super::FrameworkStore;
use crate::error::AppError;
use crate::model::{Framework, FrameworkFields};
use crate::search::Predicate;
use crate::sql::{self, QueryBuf};
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};

#[derive(Clone)]
pub struct PgFrameworkStore {
    pool: PgPool,
    schema: String,
}

impl PgFrameworkStore {
    /// Store over `pool`, using the `frameworks` table in `schema`.
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_optional(&self, q: &QueryBuf) -> Result<Option<Framework>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_params(q).fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(row_to_framework).transpose()?)
    }

    async fn fetch_all(&self, q: &QueryBuf) -> Result<Vec<Framework>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_params(q).fetch_all(&self.pool).await?;
        let records = rows.iter().map(row_to_framework).collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

#[async_trait]
impl FrameworkStore for PgFrameworkStore {
    async fn list_all(&self) -> Result<Vec<Framework>, AppError> {
        self.fetch_all(&sql::select_all(&self.schema)).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Framework>, AppError> {
        self.fetch_optional(&sql::select_by_id(&self.schema, id)).await
    }

    async fn insert(&self, fields: FrameworkFields) -> Result<Framework, AppError> {
        self.fetch_optional(&sql::insert(&self.schema, &fields))
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn update(&self, id: i64, fields: FrameworkFields) -> Result<Option<Framework>, AppError> {
        self.fetch_optional(&sql::update(&self.schema, id, &fields)).await
    }

    async fn delete(&self, id: i64) -> Result<Option<Framework>, AppError> {
        self.fetch_optional(&sql::delete(&self.schema, id)).await
    }

    async fn search(&self, predicate: &Predicate) -> Result<Vec<Framework>, AppError> {
        self.fetch_all(&sql::select_search(&self.schema, predicate)).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

fn bind_params(q: &QueryBuf) -> Query<'_, Postgres, PgArguments> {
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query
}

fn row_to_framework(row: &PgRow) -> Result<Framework, sqlx::Error> {
    Ok(Framework {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        versions: row.try_get("versions")?,
        deprecation_date: row.try_get("deprecation_date")?,
        hype_level: row.try_get("hype_level")?,
    })
}
