//! Error types for bundling and packaging.

use super::settings::Language;
use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as DeriveError;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling or packaging offline bundles
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Filesystem operation failed on a known path
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        context: &'static str,
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    /// The HTML template for a (tool, language) pair does not exist
    #[error("template for {tool} ({language}) not found: {}", .path.display())]
    MissingTemplate {
        tool: String,
        language: Language,
        path: PathBuf,
    },

    /// Settings failed validation
    #[error("invalid bundle settings: {0}")]
    InvalidSettings(String),

    /// Bundle config file could not be parsed
    #[error("invalid bundle config: {0}")]
    Config(#[from] toml::de::Error),

    /// Archive writing failed
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// External archiver exited unsuccessfully
    #[error("archiver {tool} failed: {reason}")]
    ArchiverFailed { tool: String, reason: String },

    #[error("{0}")]
    GenericError(String),
}

/// Attaches an action and a path to IO errors.
pub trait ErrorExt<T> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Converts a missing value into [`Error::GenericError`] with a message.
pub trait Context<T> {
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}
