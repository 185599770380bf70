//! The video entity and its validation rules.

use chrono::Datelike;
use serde::Serialize;
use validator::{ValidateLength, ValidateRange};

use crate::runtime::Runtime;
use crate::types::{DbId, Timestamp};
use crate::validation::{unique, Validator};

/// Maximum title length, in bytes.
pub const MAX_TITLE_BYTES: usize = 500;

/// Year of the earliest surviving motion picture.
pub const EARLIEST_YEAR: i32 = 1888;

pub const MIN_GENRES: u64 = 1;
pub const MAX_GENRES: u64 = 5;

/// A catalog video.
///
/// `id`, `created_at` and `version` belong to the store: they are zero/epoch
/// on a record that has not been inserted yet and are written back by the
/// store on insert (and `version` on update). Any `Video` a caller holds is
/// a snapshot; `version` is the token it must present to update it.
///
/// Serializes to the outward wire form: `created_at` is never emitted,
/// `year`/`runtime`/`genres` are omitted when zero or empty, and `runtime`
/// renders as `"<N> mins"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    pub id: DbId,
    #[serde(skip)]
    pub created_at: Timestamp,
    pub title: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub year: i32,
    #[serde(skip_serializing_if = "Runtime::is_zero")]
    pub runtime: Runtime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    pub version: i32,
}

impl Video {
    /// A record that has not been persisted yet.
    pub fn new(
        title: impl Into<String>,
        year: i32,
        runtime: impl Into<Runtime>,
        genres: Vec<String>,
    ) -> Self {
        Self {
            id: 0,
            created_at: Timestamp::default(),
            title: title.into(),
            year,
            runtime: runtime.into(),
            genres,
            version: 0,
        }
    }
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// Run every video rule against `video`, measuring "the future" from now.
pub fn validate_video(v: &mut Validator, video: &Video) {
    validate_video_as_of(v, video, chrono::Utc::now().year());
}

/// Run every video rule against `video` with an explicit current year.
///
/// Checks are ordered most-specific-first per field; see [`Validator`].
pub fn validate_video_as_of(v: &mut Validator, video: &Video, current_year: i32) {
    v.check(!video.title.is_empty(), "title", "must be provided");
    v.check(
        video.title.len() <= MAX_TITLE_BYTES,
        "title",
        "must not be more than 500 bytes long",
    );

    v.check(video.year != 0, "year", "must be provided");
    v.check(
        video.year.validate_range(Some(EARLIEST_YEAR), None, None, None),
        "year",
        "must be greater than 1888",
    );
    v.check(
        video.year.validate_range(None, Some(current_year), None, None),
        "year",
        "must not be in the future",
    );

    let minutes = video.runtime.minutes();
    v.check(minutes != 0, "runtime", "must be provided");
    v.check(minutes > 0, "runtime", "must be a positive integer");

    v.check(
        video.genres.validate_length(Some(MIN_GENRES), None, None),
        "genres",
        "must contain at least 1 genre",
    );
    v.check(
        video.genres.validate_length(None, Some(MAX_GENRES), None),
        "genres",
        "must not contain more than 5 genres",
    );
    v.check(
        unique(&video.genres),
        "genres",
        "must not contain duplicate values",
    );
}
