//! Common error types for the album services

use thiserror::Error;

/// Common result type for album operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across album services
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
