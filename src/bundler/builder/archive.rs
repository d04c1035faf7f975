//! Compression of one HTML file into a zip archive.

use super::tool_detection::ZIP_COMMAND;
use crate::bundler::{
    Error, Result,
    error::{Context, ErrorExt},
};
use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
    process::Command,
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Compresses a single file into a single-entry archive.
///
/// The entry is named after the source file, without any directory
/// components. An existing archive at the destination is replaced.
pub trait Archiver {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    fn compress(&self, source: &Path, archive: &Path) -> Result<()>;
}

/// In-process deflate via the `zip` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipArchiver;

impl Archiver for ZipArchiver {
    fn name(&self) -> &str {
        "zip-rs"
    }

    fn compress(&self, source: &Path, archive: &Path) -> Result<()> {
        let entry_name = entry_name(source)?;
        let mut input = File::open(source).fs_context("opening file to compress", source)?;
        let output = File::create(archive).fs_context("creating archive", archive)?;

        let mut writer = ZipWriter::new(BufWriter::new(output));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);
        writer.start_file(entry_name, options)?;
        io::copy(&mut input, &mut writer).fs_context("writing archive entry", archive)?;

        let mut output = writer.finish()?;
        io::Write::flush(&mut output).fs_context("flushing archive", archive)?;
        Ok(())
    }
}

/// The system `zip` command, run as `zip -j -q -X <archive> <source>`.
#[derive(Debug, Clone)]
pub struct CommandArchiver {
    program: PathBuf,
}

impl CommandArchiver {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Uses the `zip` found on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GenericError`] when no working `zip` command exists.
    pub fn locate() -> Result<Self> {
        let program = ZIP_COMMAND
            .clone()
            .context("zip command not found in PATH (use the built-in archiver instead)")?;
        Ok(Self::new(program))
    }
}

impl Archiver for CommandArchiver {
    fn name(&self) -> &str {
        "zip"
    }

    fn compress(&self, source: &Path, archive: &Path) -> Result<()> {
        // zip updates existing archives in place
        match std::fs::remove_file(archive) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).fs_context("removing stale archive", archive),
        }

        log::debug!(
            "Running {} -j -q -X {} {}",
            self.program.display(),
            archive.display(),
            source.display()
        );
        let output = Command::new(&self.program)
            .args(["-j", "-q", "-X"])
            .arg(archive)
            .arg(source)
            .output()
            .fs_context("running zip", &self.program)?;

        if !output.status.success() {
            return Err(Error::ArchiverFailed {
                tool: self.name().to_string(),
                reason: format!(
                    "exit code {:?}: {}",
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        Ok(())
    }
}

fn entry_name(source: &Path) -> Result<String> {
    source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .context(format!("{} has no file name", source.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_single_entry(archive: &Path) -> (String, String) {
        let mut zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
        assert_eq!(zip.len(), 1);
        let mut entry = zip.by_index(0).unwrap();
        let mut contents = String::new();
        entry.read_to_string(&mut contents).unwrap();
        (entry.name().to_string(), contents)
    }

    #[test]
    fn zip_archiver_stores_file_without_directories() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("verzugszins-de.html");
        let archive = dir.path().join("verzugszins-de.zip");
        std::fs::write(&source, "<!DOCTYPE html><p>offline</p>").unwrap();

        ZipArchiver.compress(&source, &archive).unwrap();

        let (name, contents) = read_single_entry(&archive);
        assert_eq!(name, "verzugszins-de.html");
        assert_eq!(contents, "<!DOCTYPE html><p>offline</p>");
    }

    #[test]
    fn zip_archiver_replaces_existing_archive() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.html");
        let archive = dir.path().join("a.zip");
        std::fs::write(&archive, "not a zip").unwrap();
        std::fs::write(&source, "fresh").unwrap();

        ZipArchiver.compress(&source, &archive).unwrap();
        assert_eq!(read_single_entry(&archive).1, "fresh");
    }

    #[test]
    fn zip_archiver_reports_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = ZipArchiver
            .compress(&dir.path().join("gone.html"), &dir.path().join("gone.zip"))
            .unwrap_err();
        assert!(matches!(err, Error::Fs { context: "opening file to compress", .. }));
    }

    #[test]
    fn command_archiver_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.html");
        std::fs::write(&source, "x").unwrap();

        let err = CommandArchiver::new("/nonexistent/bin/zip")
            .compress(&source, &dir.path().join("a.zip"))
            .unwrap_err();
        assert!(matches!(err, Error::Fs { context: "running zip", .. }));
    }

    #[test]
    fn command_archiver_matches_zip_layout() {
        let Ok(archiver) = CommandArchiver::locate() else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        let source = nested.join("zinseszins-fr.html");
        let archive = dir.path().join("zinseszins-fr.zip");
        std::fs::write(&source, "bonjour").unwrap();

        archiver.compress(&source, &archive).unwrap();
        assert_eq!(
            read_single_entry(&archive),
            ("zinseszins-fr.html".to_string(), "bonjour".to_string())
        );
    }
}
