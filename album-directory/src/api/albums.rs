//! Album endpoints
//!
//! - GET  /albums      list all albums in insertion order
//! - POST /albums      append an album
//! - GET  /albums/:id  fetch the first album with a matching id

use album_common::Album;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use tracing::{debug, info};

use super::PrettyJson;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /albums
///
/// Full sequence, no pagination or filtering.
pub async fn list_albums(State(state): State<AppState>) -> PrettyJson<Vec<Album>> {
    let albums = state.directory.list().await;
    debug!("Listing {} albums", albums.len());
    PrettyJson(albums)
}

/// POST /albums
///
/// Binds the body to the album shape and appends it. The Content-Type
/// header is not checked and missing fields take zero values. A body that
/// is not a JSON object of the album shape yields 400 and leaves the
/// directory untouched.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, PrettyJson<Album>)> {
    let album: Album = serde_json::from_slice(&body)?;

    let stored = state.directory.append(album).await;
    info!("Created album {:?} ({})", stored.id, stored.title);

    Ok((StatusCode::CREATED, PrettyJson(stored)))
}

/// GET /albums/:id
pub async fn get_album_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<PrettyJson<Album>> {
    match state.directory.find(&id).await {
        Some(album) => Ok(PrettyJson(album)),
        None => {
            debug!("Album {:?} not found", id);
            Err(ApiError::album_not_found())
        }
    }
}

/// Build album routes
pub fn album_routes() -> Router<AppState> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/:id", get(get_album_by_id))
}
