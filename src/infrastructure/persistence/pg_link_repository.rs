//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape of the `urls` relation.
#[derive(Debug, FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_url: String,
    access_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UrlRow> for ShortLink {
    fn from(r: UrlRow) -> Self {
        ShortLink::new(
            r.id,
            r.short_url,
            r.original_url,
            r.access_count,
            r.created_at,
            r.updated_at,
        )
    }
}

fn not_found() -> AppError {
    AppError::not_found("Short URL not found")
}

/// PostgreSQL repository for short links.
///
/// Uses bound parameters for every statement. The access count increment is a
/// single `UPDATE` so concurrent redirects never lose a count.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_url)
            VALUES ($1, $2)
            RETURNING id, original_url, short_url, access_count, created_at, updated_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn get_original_url(&self, short_url: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT original_url FROM urls WHERE short_url = $1")
            .bind(short_url)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(not_found)
    }

    async fn increment_access_count(&self, short_url: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET access_count = access_count + 1, updated_at = NOW()
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }

    async fn update_original_url(
        &self,
        short_url: &str,
        original_url: &str,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET original_url = $1, updated_at = NOW()
            WHERE short_url = $2
            "#,
        )
        .bind(original_url)
        .bind(short_url)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }

    async fn delete(&self, short_url: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM urls WHERE short_url = $1")
            .bind(short_url)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn get_stats(&self, short_url: &str) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_url, access_count, created_at, updated_at
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(ShortLink::from).ok_or_else(not_found)
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_url, access_count, created_at, updated_at
            FROM urls
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortLink::from).collect())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
