//! Handlers for the `/videos` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, HeaderName, StatusCode};
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::filters::validate_filters;
use cinelog_core::types::DbId;
use cinelog_core::validation::Validator;
use cinelog_core::video::{validate_video, Video};
use cinelog_db::models::video::{CreateVideo, UpdateVideo};

use crate::error::{AppError, AppResult};
use crate::query::ListVideosParams;
use crate::response::{DataResponse, MessageResponse, PagedResponse};
use crate::state::AppState;

/// Optional request header carrying the version the client last read.
pub const EXPECTED_VERSION_HEADER: &str = "x-expected-version";

/// POST /api/v1/videos
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateVideo>, JsonRejection>,
) -> AppResult<(
    StatusCode,
    [(HeaderName, String); 1],
    Json<DataResponse<Video>>,
)> {
    let Json(input) = payload?;
    let mut video = input.into_video()?;

    state.videos.insert(&mut video).await?;
    tracing::info!(id = video.id, title = %video.title, "Video created");

    let location = format!("/api/v1/videos/{}", video.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DataResponse { data: video }),
    ))
}

/// GET /api/v1/videos
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListVideosParams>, QueryRejection>,
) -> AppResult<Json<PagedResponse<Video>>> {
    let Query(params) = params?;
    let query = params.into_query();

    let mut v = Validator::new();
    validate_filters(&mut v, &query.filters);
    v.into_result()?;

    let (data, metadata) = state.videos.get_all(&query).await?;
    Ok(Json(PagedResponse { data, metadata }))
}

/// GET /api/v1/videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Video>>> {
    let video = state.videos.get(id).await?;
    Ok(Json(DataResponse { data: video }))
}

/// PATCH /api/v1/videos/{id}
///
/// Reads the current record, overlays the provided fields, validates the
/// result and writes it back under the version that was read. When the
/// client sends `X-Expected-Version`, a mismatch with the stored version is
/// rejected before anything is written.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    headers: HeaderMap,
    payload: Result<Json<UpdateVideo>, JsonRejection>,
) -> AppResult<Json<DataResponse<Video>>> {
    let expected_version = expected_version(&headers)?;
    let mut video = state.videos.get(id).await?;

    if let Some(expected) = expected_version {
        if expected != video.version {
            return Err(CoreError::EditConflict { entity: "Video", id }.into());
        }
    }

    let Json(input) = payload?;
    input.apply_to(&mut video);

    let mut v = Validator::new();
    validate_video(&mut v, &video);
    v.into_result()?;

    state.videos.update(&mut video).await?;
    tracing::info!(id, version = video.version, "Video updated");

    Ok(Json(DataResponse { data: video }))
}

/// DELETE /api/v1/videos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    state.videos.delete(id).await?;
    tracing::info!(id, "Video deleted");

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: "video successfully deleted",
        },
    }))
}

fn expected_version(headers: &HeaderMap) -> AppResult<Option<i32>> {
    let Some(raw) = headers.get(EXPECTED_VERSION_HEADER) else {
        return Ok(None);
    };
    raw.to_str()
        .ok()
        .and_then(|s| s.trim().parse::<i32>().ok())
        .map(Some)
        .ok_or_else(|| {
            AppError::BadRequest(format!("{EXPECTED_VERSION_HEADER} must be an integer"))
        })
}
