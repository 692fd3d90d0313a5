//! In-memory album directory
//!
//! Insertion-ordered sequence of albums behind a single `RwLock`.
//! Appends are serialized through the write lock; list and lookup
//! take the read lock and may run concurrently.

use album_common::models::{seed_albums, Album};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Shared handle to the album directory
///
/// Cloning the handle shares the underlying sequence.
#[derive(Clone, Default)]
pub struct AlbumDirectory {
    albums: Arc<RwLock<Vec<Album>>>,
}

impl AlbumDirectory {
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums: Arc::new(RwLock::new(albums)),
        }
    }

    /// Directory holding the three seed records
    pub fn with_seed() -> Self {
        Self::new(seed_albums())
    }

    /// Snapshot of all albums in insertion order
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// Append an album to the end of the sequence and return the stored record
    ///
    /// Duplicate ids are accepted; lookups return the earliest match.
    pub async fn append(&self, album: Album) -> Album {
        let mut albums = self.albums.write().await;
        if albums.iter().any(|existing| existing.id == album.id) {
            warn!("Appending album with duplicate id {:?}", album.id);
        }
        albums.push(album.clone());
        debug!("Album {:?} appended ({} total)", album.id, albums.len());
        album
    }

    /// First album whose id equals `id`
    pub async fn find(&self, id: &str) -> Option<Album> {
        self.albums
            .read()
            .await
            .iter()
            .find(|album| album.id == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}
