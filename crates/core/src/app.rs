//! The application controller.

use crate::error::AppError;
use crate::host::PageHost;
use crate::source::{ConfigLoader, ConfigSource};
use folio_markup::MarkupBuilder;
use folio_markup::builders::div;
use folio_page::{compose_page, ids};
use folio_types::Profile;
use std::sync::Arc;

/// The only message shown to visitors when initialization fails. Details go
/// to the log.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load portfolio configuration";

/// Markup mounted in place of the page when initialization fails.
pub fn error_markup(message: &str) -> String {
    div()
        .class(ids::LOADING_CLASS)
        .attr("style", "color: var(--red);")
        .text(&format!("ERROR: {}", message))
        .render()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Ready,
    Failed,
}

/// Drives one page load from profile document to interactive page.
pub struct App<S, H> {
    loader: ConfigLoader<S>,
    host: H,
    profile: Option<Arc<Profile>>,
    state: AppState,
}

impl<S, H> App<S, H>
where
    S: ConfigSource,
    H: PageHost,
{
    pub fn new(source: S, host: H) -> Self {
        Self {
            loader: ConfigLoader::new(source),
            host,
            profile: None,
            state: AppState::Idle,
        }
    }

    /// Loads the profile, mounts the page, wires interactions and starts the
    /// scroll reveal, in that order.
    ///
    /// Any failure replaces the page root with [`error_markup`]. Only one
    /// pass ever runs; later calls return [`AppError::AlreadyInitialized`]
    /// without touching the page.
    pub async fn initialize(&mut self) -> Result<Arc<Profile>, AppError> {
        if self.state != AppState::Idle {
            return Err(AppError::AlreadyInitialized);
        }

        match self.run().await {
            Ok(profile) => {
                self.state = AppState::Ready;
                log::info!("Portfolio ready");
                Ok(profile)
            }
            Err(e) => {
                log::error!("Failed to initialize portfolio: {}", e);
                self.profile = None;
                self.state = AppState::Failed;
                self.host.mount(&error_markup(LOAD_FAILURE_MESSAGE));
                Err(e)
            }
        }
    }

    async fn run(&mut self) -> Result<Arc<Profile>, AppError> {
        let profile = self.loader.load().await?;

        let markup = compose_page(&profile);
        self.host.mount(&markup);
        self.profile = Some(Arc::clone(&profile));

        self.host.wire_interactions(&profile)?;
        self.host.activate_reveal();
        Ok(profile)
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// The loaded profile, present only after a successful pass.
    pub fn profile(&self) -> Option<&Arc<Profile>> {
        self.profile.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
