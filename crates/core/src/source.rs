//! Profile document sources and the loader built on top of them.

use crate::error::{AppError, LoadError};
use folio_types::Profile;
use std::sync::Arc;

/// Delivers the raw profile document.
///
/// One call is one attempt; sources never retry. Futures are not required to
/// be `Send` so that browser sources can await JS promises.
#[allow(async_fn_in_trait)]
pub trait ConfigSource {
    async fn load(&self) -> Result<String, LoadError>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

/// A document held in memory. Used by tests and by callers that already
/// have the text.
#[derive(Debug, Clone)]
pub struct InMemoryConfigSource {
    document: String,
}

impl InMemoryConfigSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl ConfigSource for InMemoryConfigSource {
    async fn load(&self) -> Result<String, LoadError> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.document.len())
    }
}

/// Fetches and parses the profile document from a [`ConfigSource`].
pub struct ConfigLoader<S> {
    source: S,
}

impl<S: ConfigSource> ConfigLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs a single fetch-and-parse attempt.
    pub async fn load(&self) -> Result<Arc<Profile>, AppError> {
        log::info!("Loading profile from {}", self.source.describe());
        let document = self.source.load().await?;
        let profile = Profile::from_yaml(&document)?;
        log::info!("Profile loaded for {}", profile.full_name());
        Ok(Arc::new(profile))
    }
}
