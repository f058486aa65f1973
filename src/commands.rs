//! The operations behind the `folio` command-line tool.

use crate::console::{ConsoleControl, StderrNotifier};
use crate::error::CliError;
use crate::source::FileConfigSource;
use folio_core::ConfigLoader;
use folio_interact::{DocumentRenderer, ExportOrchestrator, ExportOutcome};
use folio_page::ids::EXPORT_TRIGGER_LABEL;
use folio_types::{Profile, SectionId};
use std::fmt;
use std::path::Path;

/// What a valid profile will render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    pub export_file_name: String,
    /// Entry counts per data section, in page order.
    pub sections: Vec<(SectionId, usize)>,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        let sections = SectionId::PAGE_ORDER
            .iter()
            .map(|&section| {
                let count = match section {
                    SectionId::About => profile.about.paragraphs.len(),
                    SectionId::Experience => profile.experience.len(),
                    SectionId::Skills => profile.skills.len(),
                    SectionId::Certifications => profile.certifications.len(),
                    SectionId::Education => profile.education.len(),
                    SectionId::Hero | SectionId::Contact => 1,
                };
                (section, count)
            })
            .collect();

        Self {
            name: profile.full_name(),
            export_file_name: profile.export_file_name(),
            sections,
        }
    }
}

impl fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} -> {}", self.name, self.export_file_name)?;
        for (section, count) in &self.sections {
            writeln!(f, "  {:<16}{}", section.name(), count)?;
        }
        Ok(())
    }
}

/// Loads and validates the profile at `config`.
pub async fn check(config: &Path) -> Result<ProfileSummary, CliError> {
    let profile = ConfigLoader::new(FileConfigSource::new(config)).load().await?;
    Ok(ProfileSummary::from(profile.as_ref()))
}

/// Loads the profile at `config` and runs one print export through `renderer`.
///
/// Returns the file name of the exported document.
pub async fn export<R: DocumentRenderer>(config: &Path, renderer: R) -> Result<String, CliError> {
    let profile = ConfigLoader::new(FileConfigSource::new(config)).load().await?;

    let orchestrator = ExportOrchestrator::new(
        renderer,
        ConsoleControl::new(EXPORT_TRIGGER_LABEL),
        StderrNotifier,
    );
    match orchestrator.export_document(&profile).await? {
        ExportOutcome::Completed { file_name } => Ok(file_name),
        ExportOutcome::Ignored => Err(CliError::ExportSkipped),
    }
}
