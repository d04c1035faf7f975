//! Core Settings struct and implementations.

use super::{AssetPaths, Language, ToolDescriptor};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Validated, immutable configuration for one packaging run.
///
/// Constructed once via [`SettingsBuilder`](super::SettingsBuilder) and never
/// mutated afterwards. Tool and language order is the iteration order of the
/// packager: tools outer, languages inner.
///
/// # Examples
///
/// ```no_run
/// use zinsrechner_offline::bundler::{Language, SettingsBuilder, ToolDescriptor};
///
/// # fn example() -> zinsrechner_offline::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .root("site")
///     .output_dir("dist/offline")
///     .languages(vec![Language::De])
///     .tools(vec![
///         ToolDescriptor::new("verzugszins")
///             .localized(
///                 Language::De,
///                 "Verzugszinsrechner",
///                 "Verzugszins",
///                 "verzugszins/index.html",
///             )
///             .scripts(["assets/js/interest.js"]),
///     ])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Directory all input paths are resolved against.
    root: PathBuf,

    /// Directory receiving the archives.
    output_dir: PathBuf,

    languages: Vec<Language>,

    tools: Vec<ToolDescriptor>,

    assets: AssetPaths,

    /// Date printed in the offline banner.
    generated_on: NaiveDate,
}

impl Settings {
    /// Returns the input root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the output directory for archives.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn assets(&self) -> &AssetPaths {
        &self.assets
    }

    pub fn generated_on(&self) -> NaiveDate {
        self.generated_on
    }

    /// Resolves a root-relative input path.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Number of (tool, language) pairs a run will attempt.
    pub fn pair_count(&self) -> usize {
        self.tools.len() * self.languages.len()
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        root: PathBuf,
        output_dir: PathBuf,
        languages: Vec<Language>,
        tools: Vec<ToolDescriptor>,
        assets: AssetPaths,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            root,
            output_dir,
            languages,
            tools,
            assets,
            generated_on,
        }
    }
}
