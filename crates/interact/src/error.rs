use thiserror::Error;

/// Failure of a single export attempt. Never retried automatically.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Document renderer is unavailable: {0}")]
    Unavailable(String),

    #[error("Document rendering failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
