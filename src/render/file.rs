use super::html_target;
use folio_interact::{DocumentRenderer, ExportError};
use folio_print::{ExportOptions, PrintDocument};
use std::path::{Path, PathBuf};

/// Writes `<name>_CV.html` into a directory.
#[derive(Debug, Clone)]
pub struct FileRenderer {
    out_dir: PathBuf,
}

impl FileRenderer {
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl DocumentRenderer for FileRenderer {
    async fn render(
        &self,
        document: &PrintDocument,
        options: &ExportOptions,
    ) -> Result<(), ExportError> {
        tokio::fs::create_dir_all(&self.out_dir).await?;
        let target = html_target(&self.out_dir, options);
        tokio::fs::write(&target, document.standalone_html(options)).await?;
        log::info!("Wrote print document to {}", target.display());
        Ok(())
    }
}
