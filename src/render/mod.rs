// src/render/mod.rs
//!
//! Native print renderers.
//!
//! - [`FileRenderer`]: writes the standalone print HTML to an output
//!   directory. Open it in any browser and print to PDF.
//! - [`ChromiumRenderer`]: drives a headless Chromium `--print-to-pdf` run
//!   and writes the PDF itself.

use folio_print::ExportOptions;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[cfg(feature = "native")]
mod chromium;
mod file;

#[cfg(feature = "native")]
pub use chromium::ChromiumRenderer;
pub use file::FileRenderer;

/// Path of the HTML rendition of an export inside `out_dir`.
pub fn html_target(out_dir: &Path, options: &ExportOptions) -> PathBuf {
    out_dir.join(Path::new(file_component(options)).with_extension("html"))
}

/// Path of the PDF export inside `out_dir`.
pub fn pdf_target(out_dir: &Path, options: &ExportOptions) -> PathBuf {
    out_dir.join(file_component(options))
}

// Targets never leave `out_dir`, whatever the option object says.
fn file_component(options: &ExportOptions) -> &OsStr {
    Path::new(&options.filename)
        .file_name()
        .unwrap_or_else(|| OsStr::new("export.pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Profile;

    fn options(filename: &str) -> ExportOptions {
        let profile = Profile::from_yaml(include_str!("../../tests/fixtures/profile.yaml")).unwrap();
        let mut options = ExportOptions::for_profile(&profile);
        options.filename = filename.to_string();
        options
    }

    #[test]
    fn test_targets_stay_in_out_dir() {
        let out_dir = Path::new("out");
        assert_eq!(
            html_target(out_dir, &options("Ada_Lovelace_CV.pdf")),
            out_dir.join("Ada_Lovelace_CV.html")
        );
        assert_eq!(
            pdf_target(out_dir, &options("/elsewhere/pwn_CV.pdf")),
            out_dir.join("pwn_CV.pdf")
        );
        assert_eq!(pdf_target(out_dir, &options("..")), out_dir.join("export.pdf"));
    }
}
