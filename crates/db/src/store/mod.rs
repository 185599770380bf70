//! The video store.
//!
//! [`VideoStore`] is the seam between request handling and persistence.
//! Handlers receive an `Arc<dyn VideoStore>` at construction time, so the
//! same code runs against [`PgVideoStore`] in production and
//! [`MemoryVideoStore`] in tests.
//!
//! Concurrency is optimistic: every record carries a `version`, and an
//! update only applies when the caller presents the version currently
//! stored. A writer holding a stale snapshot gets
//! [`StoreError::EditConflict`](crate::error::StoreError::EditConflict)
//! instead of silently overwriting someone else's change.

mod memory;
mod postgres;

use async_trait::async_trait;
use cinelog_core::filters::{Filters, Metadata};
use cinelog_core::types::DbId;
use cinelog_core::video::Video;

use crate::error::StoreResult;

pub use memory::MemoryVideoStore;
pub use postgres::{PgVideoStore, DEFAULT_QUERY_TIMEOUT};

/// Criteria for [`VideoStore::get_all`].
#[derive(Debug, Clone, Default)]
pub struct VideoQuery {
    /// Case-insensitive substring of the title. Empty matches everything.
    pub title: String,
    /// The video must carry every one of these genres. Empty matches everything.
    pub genres: Vec<String>,
    pub filters: Filters,
}

#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Persist a new video. The store assigns `id`, `created_at` and
    /// `version = 1` and writes them back into `video`.
    async fn insert(&self, video: &mut Video) -> StoreResult<()>;

    /// Fetch a video by id. Ids below 1 fail with `RecordNotFound` without
    /// touching the backend.
    async fn get(&self, id: DbId) -> StoreResult<Video>;

    /// Overwrite the stored video if its version still equals
    /// `video.version`, then write the incremented version back.
    ///
    /// Fails with `EditConflict` when no row matches `id` and `version`,
    /// whether because another writer got there first or the row is gone.
    async fn update(&self, video: &mut Video) -> StoreResult<()>;

    /// Hard-delete a video. Ids below 1, or ids matching no row, fail with
    /// `RecordNotFound`.
    async fn delete(&self, id: DbId) -> StoreResult<()>;

    /// List videos matching `query`, one page at a time. Returns an empty
    /// vector (and empty metadata) when nothing matches.
    async fn get_all(&self, query: &VideoQuery) -> StoreResult<(Vec<Video>, Metadata)>;
}
