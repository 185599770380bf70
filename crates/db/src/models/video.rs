//! Video row model and DTOs.

use cinelog_core::error::CoreError;
use cinelog_core::runtime::Runtime;
use cinelog_core::types::{DbId, Timestamp};
use cinelog_core::validation::Validator;
use cinelog_core::video::{validate_video, Video};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow)]
pub struct VideoRow {
    pub id: DbId,
    pub created_at: Timestamp,
    pub title: String,
    pub year: i32,
    pub runtime: i32,
    pub genres: Vec<String>,
    pub version: i32,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Video {
            id: row.id,
            created_at: row.created_at,
            title: row.title,
            year: row.year,
            runtime: Runtime::new(row.runtime),
            genres: row.genres,
            version: row.version,
        }
    }
}

/// DTO for creating a video.
///
/// Missing scalar fields default to zero so the validator reports them as
/// "must be provided". `runtime` is a plain integer on input.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub runtime: Runtime,
    pub genres: Option<Vec<String>>,
}

impl CreateVideo {
    /// Validate the payload and build the unpersisted record.
    pub fn into_video(self) -> Result<Video, CoreError> {
        let mut v = Validator::new();
        v.check(self.genres.is_some(), "genres", "must be provided");

        let video = Video::new(
            self.title,
            self.year,
            self.runtime,
            self.genres.unwrap_or_default(),
        );
        validate_video(&mut v, &video);
        v.into_result()?;
        Ok(video)
    }
}

/// DTO for a partial update. All fields are optional.
///
/// `None` leaves the stored value unchanged; `Some` replaces it, including
/// with an empty or zero value, which validation then rejects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub runtime: Option<Runtime>,
    pub genres: Option<Vec<String>>,
}

impl UpdateVideo {
    /// Overlay the provided fields onto `video`.
    pub fn apply_to(self, video: &mut Video) {
        if let Some(title) = self.title {
            video.title = title;
        }
        if let Some(year) = self.year {
            video.year = year;
        }
        if let Some(runtime) = self.runtime {
            video.runtime = runtime;
        }
        if let Some(genres) = self.genres {
            video.genres = genres;
        }
    }
}
