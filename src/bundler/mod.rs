//! Offline bundling of the calculator pages.
//!
//! This module turns each localised calculator template into a single
//! self-contained HTML document and packages it as a zip archive:
//!
//! - [`Bundler`] inlines stylesheets, fonts, icons and scripts
//! - [`Packager`] runs the bundler for every (tool, language) pair and
//!   compresses the results
//! - [`Settings`] describes the tools, languages and asset locations
//!
//! Missing assets degrade to placeholders and are reported as
//! [`BundleWarning`]s. A missing template fails only its own pair.

mod assets;
mod builder;
mod document;
pub mod error;
pub mod generated;
pub mod settings;
pub mod template;
mod utils;

pub use assets::{AssetKind, AssetLoader, BundleWarning};
pub use builder::{
    Archiver, CommandArchiver, PackageOutcome, PackageStatus, PackageSummary, PackagedArchive,
    Packager, ZipArchiver, calculate_sha256,
};
pub use document::{AssembledDocument, Bundler};
pub use error::{Error, Result};
pub use settings::{
    AssetPaths, BannerText, DEFAULT_OUTPUT_DIR, Language, Settings, SettingsBuilder,
    ToolDescriptor, builtin_tools, load_settings_file, parse_settings,
};
