//! Packaging of assembled documents into zip archives.
//!
//! - `archive` - the [`Archiver`] trait and its two implementations
//! - `checksum` - SHA-256 of produced archives
//! - `orchestrator` - the [`Packager`] run over all (tool, language) pairs
//! - `tool_detection` - lookup of the external `zip` command

mod archive;
mod checksum;
mod orchestrator;
mod tool_detection;

pub use archive::{Archiver, CommandArchiver, ZipArchiver};
pub use checksum::calculate_sha256;
pub use orchestrator::{PackageOutcome, PackageStatus, PackageSummary, PackagedArchive, Packager};
