//! File system utilities for packaging.
//!
//! Idempotent wrappers over `std::fs` that attach the failing path to every
//! error.

use crate::bundler::error::{ErrorExt, Result};
use std::{fs, io, path::Path};

/// Creates all of the directories of the specified path.
///
/// Succeeds if the directory already exists.
pub fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).fs_context("creating directory", path)
}

/// Writes `contents` to `path`, creating parent directories as needed and
/// replacing any existing file.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, contents).fs_context("writing file", path)
}

/// Removes a file if it exists.
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing file", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/out.html");
        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn operations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("offline");
        create_dir_all(&sub).unwrap();
        create_dir_all(&sub).unwrap();

        let file = sub.join("gone.html");
        remove_file_if_exists(&file).unwrap();
        fs::write(&file, "x").unwrap();
        remove_file_if_exists(&file).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn create_dir_fails_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("offline");
        fs::write(&blocker, "not a directory").unwrap();
        let err = create_dir_all(&blocker).unwrap_err();
        assert!(err.to_string().starts_with("creating directory"));
    }
}
