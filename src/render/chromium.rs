use super::pdf_target;
use folio_interact::{DocumentRenderer, ExportError};
use folio_print::{ExportOptions, PrintDocument};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Prints the export with a headless Chromium binary.
///
/// The print HTML is staged in a temporary file that is removed when the
/// render finishes, successfully or not.
#[derive(Debug, Clone)]
pub struct ChromiumRenderer {
    binary: PathBuf,
    out_dir: PathBuf,
}

impl ChromiumRenderer {
    pub fn new(binary: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }
}

impl DocumentRenderer for ChromiumRenderer {
    async fn render(
        &self,
        document: &PrintDocument,
        options: &ExportOptions,
    ) -> Result<(), ExportError> {
        let staging = tempfile::Builder::new()
            .prefix("folio-")
            .suffix(".html")
            .tempfile()?;
        tokio::fs::write(staging.path(), document.standalone_html(options)).await?;

        tokio::fs::create_dir_all(&self.out_dir).await?;
        let target = pdf_target(&self.out_dir, options);

        log::debug!("Running {} for {}", self.binary.display(), target.display());
        let output = Command::new(&self.binary)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", target.display()))
            .arg(format!("file://{}", staging.path().display()))
            .output()
            .await
            .map_err(|e| {
                ExportError::Unavailable(format!("Could not start {}: {}", self.binary.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::Render(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            )));
        }

        log::info!("Wrote {}", target.display());
        Ok(())
    }
}
