//! Album record model

use serde::{Deserialize, Serialize};

/// A single album record
///
/// `id` is supplied by the caller and is never checked for format or
/// uniqueness. `price` carries no currency unit and may be negative.
/// Fields absent from incoming JSON take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

/// Records present in the directory at process start, in order
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            39.99,
        ),
    ]
}
