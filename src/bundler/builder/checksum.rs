//! Archive checksum calculation.

use crate::bundler::{Result, error::ErrorExt};
use sha2::{Digest, Sha256};
use std::{fs::File, io::Read, path::Path};

/// Calculates the SHA-256 checksum of a file.
///
/// Reads in 8KB chunks and returns the lowercase hex digest (64 characters).
pub fn calculate_sha256(path: &Path) -> Result<String> {
    let mut file = File::open(path).fs_context("opening file for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_known_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc.txt");
        std::fs::write(&path, "abc").unwrap();
        assert_eq!(
            calculate_sha256(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn missing_file_carries_path() {
        let err = calculate_sha256(Path::new("/nonexistent/archive.zip")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/archive.zip"));
    }
}
