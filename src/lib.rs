//! Swiss interest calculator engine and offline bundle packager.
//!
//! This library provides:
//! - [`interest`]: actual/360 default interest, annual compounding, and Swiss
//!   number formatting and parsing
//! - [`bundler`]: assembly of self-contained offline HTML documents and their
//!   packaging into one zip archive per tool and language
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod interest;

// Re-export commonly used types
pub use error::{AppError, CliError, Result};
