//! Locations of shared and vendored assets.

use serde::Deserialize;
use std::path::PathBuf;

/// Shared asset paths, relative to the bundle root.
///
/// Every field can be overridden from the `[assets]` table of a bundle
/// config file; unspecified fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetPaths {
    /// Site stylesheet shared by all tools.
    pub stylesheet: PathBuf,
    /// Regular (400) weight of the body font.
    pub font_regular: PathBuf,
    /// Semibold (600) weight of the body font.
    pub font_semibold: PathBuf,
    /// Date picker stylesheet.
    pub datepicker_css: PathBuf,
    /// Date picker script.
    pub datepicker_js: PathBuf,
    /// PDF generation library.
    pub pdf_js: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            stylesheet: "assets/css/style.css".into(),
            font_regular: "assets/fonts/inter-regular.woff2".into(),
            font_semibold: "assets/fonts/inter-semibold.woff2".into(),
            datepicker_css: "assets/vendor/flatpickr.min.css".into(),
            datepicker_js: "assets/vendor/flatpickr.min.js".into(),
            pdf_js: "assets/vendor/jspdf.umd.min.js".into(),
        }
    }
}
