//! HTTP API handlers for album-directory

pub mod albums;
pub mod buildinfo;
pub mod health;
pub mod json;

pub use albums::{album_routes, create_album, get_album_by_id, list_albums};
pub use buildinfo::{buildinfo_routes, get_build_info};
pub use health::health_routes;
pub use json::PrettyJson;
