//! In-process [`VideoStore`] used as a fake backend.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use cinelog_core::filters::{Metadata, SortDirection};
use cinelog_core::types::DbId;
use cinelog_core::video::Video;
use tokio::sync::RwLock;

use super::{VideoQuery, VideoStore};
use crate::error::{StoreError, StoreResult};

/// Keeps videos in a map behind a single lock.
///
/// Mirrors the PostgreSQL store's semantics: ids come from a sequence and
/// are never reused, the version check and increment happen under one
/// write lock (standing in for row-level atomicity), and deletes are hard.
#[derive(Debug, Default)]
pub struct MemoryVideoStore {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: DbId,
    rows: BTreeMap<DbId, Video>,
}

impl MemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Titles compare by byte order. PostgreSQL orders them by the database
/// collation, so mixed-case or non-ASCII titles can sort differently here.
fn compare(a: &Video, b: &Video, column: &str) -> Ordering {
    match column {
        "title" => a.title.cmp(&b.title),
        "year" => a.year.cmp(&b.year),
        "runtime" => a.runtime.cmp(&b.runtime),
        _ => a.id.cmp(&b.id),
    }
}

fn matches(video: &Video, query: &VideoQuery) -> bool {
    let title_ok = query.title.is_empty()
        || video
            .title
            .to_lowercase()
            .contains(&query.title.to_lowercase());
    let genres_ok = query.genres.iter().all(|g| video.genres.contains(g));
    title_ok && genres_ok
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn insert(&self, video: &mut Video) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        video.id = state.last_id;
        video.created_at = chrono::Utc::now();
        video.version = 1;
        state.rows.insert(video.id, video.clone());
        Ok(())
    }

    async fn get(&self, id: DbId) -> StoreResult<Video> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }
        let state = self.state.read().await;
        state.rows.get(&id).cloned().ok_or(StoreError::RecordNotFound)
    }

    async fn update(&self, video: &mut Video) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let stored = match state.rows.get_mut(&video.id) {
            Some(stored) if stored.version == video.version => stored,
            _ => return Err(StoreError::EditConflict),
        };

        let version = stored.version + 1;
        *stored = Video {
            created_at: stored.created_at,
            version,
            ..video.clone()
        };
        video.version = version;
        Ok(())
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }
        let mut state = self.state.write().await;
        state
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::RecordNotFound)
    }

    async fn get_all(&self, query: &VideoQuery) -> StoreResult<(Vec<Video>, Metadata)> {
        let filters = &query.filters;
        let column = filters.sort_column();
        let direction = filters.sort_direction();

        let state = self.state.read().await;
        let mut found: Vec<Video> = state
            .rows
            .values()
            .filter(|video| matches(video, query))
            .cloned()
            .collect();
        drop(state);

        found.sort_by(|a, b| {
            let primary = match direction {
                SortDirection::Asc => compare(a, b, column),
                SortDirection::Desc => compare(b, a, column),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });

        let total_records = found.len() as i64;
        let offset = usize::try_from(filters.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(filters.limit()).unwrap_or(0);
        let page: Vec<Video> = found.into_iter().skip(offset).take(limit).collect();

        // PostgreSQL derives the total from the returned rows, so a page past
        // the end reports no metadata at all. Match that.
        let metadata = if page.is_empty() {
            Metadata::default()
        } else {
            Metadata::calculate(total_records, filters.page, filters.page_size)
        };
        Ok((page, metadata))
    }
}
