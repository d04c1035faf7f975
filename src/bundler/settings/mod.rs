//! Configuration structures for offline bundling.
//!
//! This module provides the immutable [`Settings`] consumed by the bundler
//! and packager, the [`SettingsBuilder`] that validates them, the tool and
//! language descriptors, and loading from a TOML bundle config file.

mod builder;
mod core;
mod file;
mod language;
mod paths;
mod tool;

// Re-export all public types
pub use builder::{DEFAULT_OUTPUT_DIR, SettingsBuilder};
pub use self::core::Settings;
pub use file::{load_settings_file, parse_settings};
pub use language::{BannerText, Language};
pub use paths::AssetPaths;
pub use tool::{ToolDescriptor, builtin_tools};
