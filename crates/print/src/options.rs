//! Static settings handed to the document renderer on every export.

use crate::stylesheet::ATOMIC_UNIT_CLASSES;
use folio_types::Profile;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    A4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub format: ImageFormat,
    pub quality: f64,
}

/// Rasterization settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasOptions {
    pub scale: u32,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub letter_rendering: bool,
    pub logging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSetup {
    pub unit: &'static str,
    pub format: PageFormat,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageBreakRules {
    pub mode: Vec<&'static str>,
    /// CSS selectors of blocks that must stay on one page.
    pub avoid: Vec<String>,
}

/// The full option set for one export. Serializes to the option object the
/// browser renderer expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportOptions {
    /// Millimetres, ordered top, left, bottom, right.
    pub margin: [u32; 4],
    pub filename: String,
    pub image: ImageOptions,
    pub html2canvas: CanvasOptions,
    #[serde(rename = "jsPDF")]
    pub page: PageSetup,
    pub pagebreak: PageBreakRules,
}

impl ExportOptions {
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            margin: [10, 15, 10, 15],
            filename: profile.export_file_name(),
            image: ImageOptions {
                format: ImageFormat::Jpeg,
                quality: 0.98,
            },
            html2canvas: CanvasOptions {
                scale: 2,
                use_cors: true,
                letter_rendering: true,
                logging: false,
            },
            page: PageSetup {
                unit: "mm",
                format: PageFormat::A4,
                orientation: Orientation::Portrait,
            },
            pagebreak: PageBreakRules {
                mode: vec!["css", "legacy"],
                avoid: ATOMIC_UNIT_CLASSES
                    .iter()
                    .map(|class| format!(".{}", class))
                    .collect(),
            },
        }
    }

    /// CSS `@page` rule equivalent to the page setup and margins.
    pub fn page_rule(&self) -> String {
        let [top, left, bottom, right] = self.margin;
        format!(
            "@page {{ size: A4 portrait; margin: {}mm {}mm {}mm {}mm; }}",
            top, right, bottom, left
        )
    }
}
