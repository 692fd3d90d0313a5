//! # Album Common Library
//!
//! Shared code for the album services including:
//! - Album record model and seed data
//! - Common error type
//! - Bootstrap configuration loading

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::Album;
