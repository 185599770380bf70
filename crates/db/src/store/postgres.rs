//! PostgreSQL-backed [`VideoStore`].

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use cinelog_core::filters::Metadata;
use cinelog_core::types::{DbId, Timestamp};
use cinelog_core::video::Video;
use sqlx::{FromRow, PgPool};

use super::{VideoQuery, VideoStore};
use crate::error::{StoreError, StoreResult};
use crate::models::video::VideoRow;

/// Per-statement budget when none is configured.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at, title, year, runtime, genres, version";

/// Stores videos in the `videos` table.
///
/// Every call issues exactly one statement and is bounded by `timeout`. When
/// the budget runs out the in-flight query future is dropped, which releases
/// its pooled connection, and the call fails with `StoreError::Timeout`.
#[derive(Debug, Clone)]
pub struct PgVideoStore {
    pool: PgPool,
    timeout: Duration,
}

#[derive(FromRow)]
struct ListedVideoRow {
    total_records: i64,
    #[sqlx(flatten)]
    video: VideoRow,
}

impl PgVideoStore {
    pub fn new(pool: PgPool) -> Self {
        Self::with_timeout(pool, DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_timeout(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    async fn bounded<T, F>(&self, operation: &'static str, query: F) -> StoreResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, query).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::Timeout {
                operation,
                after: self.timeout,
            }),
        }
    }
}

/// Escape LIKE metacharacters so user input only ever matches literally.
fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn insert(&self, video: &mut Video) -> StoreResult<()> {
        let query = sqlx::query_as::<_, (DbId, Timestamp, i32)>(
            "INSERT INTO videos (title, year, runtime, genres)
             VALUES ($1, $2, $3, $4)
             RETURNING id, created_at, version",
        )
        .bind(&video.title)
        .bind(video.year)
        .bind(video.runtime.minutes())
        .bind(&video.genres)
        .fetch_one(&self.pool);

        let (id, created_at, version) = self.bounded("insert", query).await?;
        video.id = id;
        video.created_at = created_at;
        video.version = version;
        Ok(())
    }

    async fn get(&self, id: DbId) -> StoreResult<Video> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }

        let sql = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        let query = sqlx::query_as::<_, VideoRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool);

        self.bounded("get", query)
            .await?
            .map(Video::from)
            .ok_or(StoreError::RecordNotFound)
    }

    async fn update(&self, video: &mut Video) -> StoreResult<()> {
        let query = sqlx::query_scalar::<_, i32>(
            "UPDATE videos
             SET title = $1, year = $2, runtime = $3, genres = $4, version = version + 1
             WHERE id = $5 AND version = $6
             RETURNING version",
        )
        .bind(&video.title)
        .bind(video.year)
        .bind(video.runtime.minutes())
        .bind(&video.genres)
        .bind(video.id)
        .bind(video.version)
        .fetch_optional(&self.pool);

        let version = self
            .bounded("update", query)
            .await?
            .ok_or(StoreError::EditConflict)?;
        video.version = version;
        Ok(())
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }

        let query = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool);

        let result = self.bounded("delete", query).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::RecordNotFound);
        }
        Ok(())
    }

    async fn get_all(&self, query: &VideoQuery) -> StoreResult<(Vec<Video>, Metadata)> {
        let filters = &query.filters;
        let sql = format!(
            "SELECT count(*) OVER() AS total_records, {COLUMNS}
             FROM videos
             WHERE title ILIKE $1
               AND (genres @> $2 OR $2 = '{{}}')
             ORDER BY {} {}, id ASC
             LIMIT $3 OFFSET $4",
            filters.sort_column(),
            filters.sort_direction().as_sql(),
        );
        let rows = sqlx::query_as::<_, ListedVideoRow>(&sql)
            .bind(like_pattern(&query.title))
            .bind(&query.genres)
            .bind(filters.limit())
            .bind(filters.offset())
            .fetch_all(&self.pool);

        let rows = self.bounded("get_all", rows).await?;
        let total_records = rows.first().map_or(0, |row| row.total_records);
        let videos = rows.into_iter().map(|row| Video::from(row.video)).collect();

        Ok((
            videos,
            Metadata::calculate(total_records, filters.page, filters.page_size),
        ))
    }
}
