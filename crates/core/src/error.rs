// src/error.rs
//! Error types for one initialization pass.

use folio_types::ProfileError;
use thiserror::Error;

/// Failure to retrieve the raw profile document. Never retried.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Request for '{url}' failed: {message}")]
    Request { url: String, message: String },
    #[error("Request for '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// The main error enum for application initialization.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load profile document: {0}")]
    Load(#[from] LoadError),
    #[error("Failed to parse profile document: {0}")]
    Parse(#[source] ProfileError),
    #[error("Profile document is incomplete: {0}")]
    Render(#[source] ProfileError),
    #[error("Required page element '{0}' is missing")]
    MissingElement(String),
    #[error("Application is already initialized")]
    AlreadyInitialized,
}

impl From<ProfileError> for AppError {
    fn from(e: ProfileError) -> Self {
        if e.is_missing_field() {
            AppError::Render(e)
        } else {
            AppError::Parse(e)
        }
    }
}
