//! Packaging orchestration.
//!
//! This module provides the [`Packager`] that walks every configured
//! (tool, language) pair, assembles the offline document, writes it next to
//! its archive and compresses it.

use super::{
    archive::{Archiver, ZipArchiver},
    checksum::calculate_sha256,
};
use crate::bundler::{
    AssembledDocument, BundleWarning, Bundler, Language, Result, Settings, ToolDescriptor,
    error::ErrorExt, utils::fs,
};
use std::path::{Path, PathBuf};

/// Archive produced for one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedArchive {
    pub path: PathBuf,
    /// Archive size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive
    pub checksum: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageStatus {
    Packaged(PackagedArchive),
    Failed { reason: String },
}

/// Result of packaging one (tool, language) pair.
#[derive(Debug, Clone)]
pub struct PackageOutcome {
    pub tool_id: String,
    pub language: Language,
    pub warnings: Vec<BundleWarning>,
    pub status: PackageStatus,
}

impl PackageOutcome {
    pub fn is_packaged(&self) -> bool {
        matches!(self.status, PackageStatus::Packaged(_))
    }

    pub fn archive(&self) -> Option<&PackagedArchive> {
        match &self.status {
            PackageStatus::Packaged(archive) => Some(archive),
            PackageStatus::Failed { .. } => None,
        }
    }
}

/// Per-pair outcomes of a packaging run, in iteration order.
#[derive(Debug, Clone)]
pub struct PackageSummary {
    pub output_dir: PathBuf,
    pub outcomes: Vec<PackageOutcome>,
}

impl PackageSummary {
    /// Number of archives created.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_packaged()).count()
    }

    /// Number of pairs attempted.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Creates one zip archive per configured (tool, language) pair.
///
/// # Examples
///
/// ```no_run
/// use zinsrechner_offline::bundler::{Packager, SettingsBuilder};
///
/// # fn example() -> zinsrechner_offline::bundler::Result<()> {
/// let settings = SettingsBuilder::builtin().root("public").build()?;
/// let summary = Packager::new(settings).package_all()?;
/// println!("{}/{} archives", summary.succeeded(), summary.total());
/// # Ok(())
/// # }
/// ```
pub struct Packager {
    bundler: Bundler,
    archiver: Box<dyn Archiver>,
}

impl std::fmt::Debug for Packager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Packager")
            .field("bundler", &self.bundler)
            .field("archiver", &self.archiver.name())
            .finish()
    }
}

impl Packager {
    /// Creates a packager using the in-process [`ZipArchiver`].
    pub fn new(settings: Settings) -> Self {
        Self::with_archiver(settings, Box::new(ZipArchiver))
    }

    pub fn with_archiver(settings: Settings, archiver: Box<dyn Archiver>) -> Self {
        Self {
            bundler: Bundler::new(settings),
            archiver,
        }
    }

    pub fn settings(&self) -> &Settings {
        self.bundler.settings()
    }

    pub fn package_all(&self) -> Result<PackageSummary> {
        self.package_all_with(|_| {})
    }

    /// Packages every pair, calling `on_outcome` as each one finishes.
    ///
    /// A failing pair is recorded and the run continues with the next one.
    ///
    /// # Errors
    ///
    /// Only a failure to create the output directory is returned.
    pub fn package_all_with<F>(&self, mut on_outcome: F) -> Result<PackageSummary>
    where
        F: FnMut(&PackageOutcome),
    {
        let settings = self.settings();
        let output_dir = settings.output_dir();
        fs::create_dir_all(output_dir)?;

        log::info!(
            "Packaging {} offline bundles into {} using {}",
            settings.pair_count(),
            output_dir.display(),
            self.archiver.name()
        );

        let mut outcomes = Vec::with_capacity(settings.pair_count());
        for tool in settings.tools() {
            for &language in settings.languages() {
                let outcome = self.package_one(tool, language, output_dir);
                on_outcome(&outcome);
                outcomes.push(outcome);
            }
        }

        Ok(PackageSummary {
            output_dir: output_dir.to_path_buf(),
            outcomes,
        })
    }

    fn package_one(
        &self,
        tool: &ToolDescriptor,
        language: Language,
        output_dir: &Path,
    ) -> PackageOutcome {
        let document = match self.bundler.assemble(tool, language) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("Skipping {} ({language}): {e}", tool.id());
                return PackageOutcome {
                    tool_id: tool.id().to_string(),
                    language,
                    warnings: Vec::new(),
                    status: PackageStatus::Failed {
                        reason: e.to_string(),
                    },
                };
            }
        };

        let AssembledDocument {
            tool_id,
            language,
            html,
            warnings,
        } = document;

        let status = match self.write_archive(&tool_id, language, &html, output_dir) {
            Ok(archive) => {
                log::info!(
                    "Packaged {} ({} bytes, sha256 {})",
                    archive.path.display(),
                    archive.size,
                    archive.checksum
                );
                PackageStatus::Packaged(archive)
            }
            Err(e) => {
                log::warn!("Failed to package {tool_id} ({language}): {e}");
                PackageStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };

        PackageOutcome {
            tool_id,
            language,
            warnings,
            status,
        }
    }

    fn write_archive(
        &self,
        tool_id: &str,
        language: Language,
        html: &str,
        output_dir: &Path,
    ) -> Result<PackagedArchive> {
        let stem = format!("{tool_id}-{}", language.code());
        let html_path = output_dir.join(format!("{stem}.html"));
        let archive_path = output_dir.join(format!("{stem}.zip"));

        fs::write_file(&html_path, html)?;
        // The HTML stays on disk when compression fails
        self.archiver.compress(&html_path, &archive_path)?;

        let size = std::fs::metadata(&archive_path)
            .fs_context("reading archive metadata", &archive_path)?
            .len();
        let checksum = calculate_sha256(&archive_path)?;
        fs::remove_file_if_exists(&html_path)?;

        Ok(PackagedArchive {
            path: archive_path,
            size,
            checksum,
        })
    }
}
