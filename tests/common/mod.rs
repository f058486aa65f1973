pub mod fixtures;
pub mod markup_assertions;

use folio::core::{AppError, PageHost};
use folio::types::Profile;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Installs a test logger once per process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A page host that keeps the page root as a string.
#[derive(Debug, Default)]
pub struct StringPageHost {
    pub root: String,
    pub loading: bool,
    pub wired: bool,
    pub revealed: bool,
    pub mounts: usize,
}

impl StringPageHost {
    pub fn loading() -> Self {
        Self {
            root: "Loading...".to_string(),
            loading: true,
            ..Default::default()
        }
    }
}

impl PageHost for StringPageHost {
    fn mount(&mut self, markup: &str) {
        self.root = markup.to_string();
        self.loading = false;
        self.mounts += 1;
    }

    fn wire_interactions(&mut self, _profile: &Arc<Profile>) -> Result<(), AppError> {
        if !self.root.contains(r#"id="hamburger""#) {
            return Err(AppError::MissingElement("hamburger".to_string()));
        }
        self.wired = true;
        Ok(())
    }

    fn activate_reveal(&mut self) {
        self.revealed = true;
    }
}
