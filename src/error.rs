use folio_core::AppError;
use folio_interact::ExportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Profile(#[from] AppError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Export did not run: another export holds the trigger")]
    ExportSkipped,
}
