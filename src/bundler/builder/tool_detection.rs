//! External tool detection.
//!
//! Lookups run once per process and are cached.

use std::{path::PathBuf, sync::LazyLock};

/// Location of the `zip` command, if it is on `PATH` and runs.
pub static ZIP_COMMAND: LazyLock<Option<PathBuf>> = LazyLock::new(|| match which::which("zip") {
    Ok(path) => {
        log::debug!("Found zip at: {}", path.display());

        match std::process::Command::new(&path).arg("-v").output() {
            Ok(output) if output.status.success() => {
                let banner = String::from_utf8_lossy(&output.stdout);
                let first_line = banner.lines().nth(1).unwrap_or_default();
                log::debug!("zip available: {}", first_line.trim());
                Some(path)
            }
            Ok(output) => {
                log::warn!(
                    "zip found at {} but -v check failed (exit code: {:?}). Stderr: {}",
                    path.display(),
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr)
                );
                None
            }
            Err(e) => {
                log::warn!(
                    "zip found at {} but failed to execute: {}. Check file permissions.",
                    path.display(),
                    e
                );
                None
            }
        }
    }
    Err(e) => {
        log::debug!("zip not found in PATH: {}", e);
        None
    }
});
