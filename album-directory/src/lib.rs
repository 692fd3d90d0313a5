//! album-directory library - Album Directory Service
//!
//! Serves an in-memory, insertion-ordered collection of album records
//! over a small JSON REST API.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod error;
pub mod store;

pub use crate::error::{ApiError, ApiResult};
pub use crate::store::AlbumDirectory;

/// Module name reported by the health endpoint and used for config lookup
pub const MODULE_NAME: &str = "album-directory";

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The album directory (shared handle)
    pub directory: AlbumDirectory,
}

impl AppState {
    /// Create new application state
    pub fn new(directory: AlbumDirectory) -> Self {
        Self { directory }
    }

    /// State holding only the seed records
    pub fn seeded() -> Self {
        Self::new(AlbumDirectory::with_seed())
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::album_routes())
        .merge(api::health_routes())
        .merge(api::buildinfo_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Enable CORS for local access
        .layer(CorsLayer::permissive())
}
