//! Loading of optional assets with structured warnings.
//!
//! Missing or unreadable assets never abort a bundle. The loader records a
//! [`BundleWarning`], logs it, and lets the caller substitute a placeholder.

use std::{
    fmt, io,
    path::{Path, PathBuf},
};

/// Role of an asset inside the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Font,
    VendorStylesheet,
    VendorScript,
    AppScript,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetKind::Stylesheet => "stylesheet",
            AssetKind::Font => "font",
            AssetKind::VendorStylesheet => "vendor stylesheet",
            AssetKind::VendorScript => "vendor script",
            AssetKind::AppScript => "script",
        })
    }
}

/// A degraded input recorded while assembling a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleWarning {
    /// File does not exist; a placeholder was used.
    MissingAsset { kind: AssetKind, path: PathBuf },
    /// File exists but could not be read as expected; a placeholder was used.
    UnreadableAsset {
        kind: AssetKind,
        path: PathBuf,
        reason: String,
    },
}

impl BundleWarning {
    pub fn path(&self) -> &Path {
        match self {
            BundleWarning::MissingAsset { path, .. }
            | BundleWarning::UnreadableAsset { path, .. } => path,
        }
    }
}

impl fmt::Display for BundleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleWarning::MissingAsset { kind, path } => {
                write!(f, "missing {kind}: {}", path.display())
            }
            BundleWarning::UnreadableAsset { kind, path, reason } => {
                write!(f, "unreadable {kind}: {} ({reason})", path.display())
            }
        }
    }
}

/// Reads root-relative assets and collects warnings for the ones it cannot read.
#[derive(Debug)]
pub struct AssetLoader<'a> {
    root: &'a Path,
    warnings: Vec<BundleWarning>,
}

impl<'a> AssetLoader<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self {
            root,
            warnings: Vec::new(),
        }
    }

    /// Reads a text asset, or `None` after recording a warning.
    pub fn text(&mut self, relative: &Path, kind: AssetKind) -> Option<String> {
        let result = std::fs::read_to_string(self.root.join(relative));
        self.settle(result, relative, kind)
    }

    /// Reads a text asset, substituting a `/* missing ... */` comment.
    ///
    /// The comment syntax is valid in both CSS and JavaScript.
    pub fn text_or_placeholder(&mut self, relative: &Path, kind: AssetKind) -> String {
        self.text(relative, kind)
            .unwrap_or_else(|| placeholder(kind, relative))
    }

    /// Reads a binary asset, or `None` after recording a warning.
    pub fn bytes(&mut self, relative: &Path, kind: AssetKind) -> Option<Vec<u8>> {
        let result = std::fs::read(self.root.join(relative));
        self.settle(result, relative, kind)
    }

    pub fn warnings(&self) -> &[BundleWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<BundleWarning> {
        self.warnings
    }

    fn settle<T>(&mut self, result: io::Result<T>, relative: &Path, kind: AssetKind) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                let warning = if e.kind() == io::ErrorKind::NotFound {
                    BundleWarning::MissingAsset {
                        kind,
                        path: relative.to_path_buf(),
                    }
                } else {
                    BundleWarning::UnreadableAsset {
                        kind,
                        path: relative.to_path_buf(),
                        reason: e.to_string(),
                    }
                };
                log::warn!("{warning}");
                self.warnings.push(warning);
                None
            }
        }
    }
}

fn placeholder(kind: AssetKind, relative: &Path) -> String {
    // Keep the comment well-formed even for odd file names.
    let shown = relative.display().to_string().replace("*/", "* /");
    format!("/* {kind} not available: {shown} */")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("present.css"), "body{}").unwrap();

        let mut loader = AssetLoader::new(dir.path());
        assert_eq!(
            loader.text(Path::new("present.css"), AssetKind::Stylesheet).as_deref(),
            Some("body{}")
        );
        assert_eq!(loader.bytes(Path::new("font.woff2"), AssetKind::Font), None);
        let placeholder =
            loader.text_or_placeholder(Path::new("vendor/lib.js"), AssetKind::VendorScript);
        assert_eq!(placeholder, "/* vendor script not available: vendor/lib.js */");

        let warnings = loader.into_warnings();
        assert_eq!(
            warnings,
            vec![
                BundleWarning::MissingAsset {
                    kind: AssetKind::Font,
                    path: PathBuf::from("font.woff2"),
                },
                BundleWarning::MissingAsset {
                    kind: AssetKind::VendorScript,
                    path: PathBuf::from("vendor/lib.js"),
                },
            ]
        );
        assert_eq!(warnings[1].to_string(), "missing vendor script: vendor/lib.js");
    }

    #[test]
    fn non_utf8_text_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("binary.js"), [0xff, 0xfe, 0x00]).unwrap();

        let mut loader = AssetLoader::new(dir.path());
        assert!(loader.text(Path::new("binary.js"), AssetKind::AppScript).is_none());
        assert!(matches!(
            loader.warnings(),
            [BundleWarning::UnreadableAsset { kind: AssetKind::AppScript, .. }]
        ));
    }
}
