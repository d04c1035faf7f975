//! Builder for constructing Settings.

use super::{AssetPaths, Language, Settings, ToolDescriptor, builtin_tools};
use crate::bundler::error::{Error, Result};
use chrono::NaiveDate;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "offline";

/// Builder for constructing [`Settings`].
///
/// Unset fields fall back to defaults: root `.`, output `offline`, both
/// languages, no tools (see [`SettingsBuilder::builtin`]), default asset
/// paths and today's date.
///
/// # Examples
///
/// ```no_run
/// use zinsrechner_offline::bundler::SettingsBuilder;
///
/// # fn example() -> zinsrechner_offline::bundler::Result<()> {
/// let settings = SettingsBuilder::builtin()
///     .root("public")
///     .output_dir("public/offline")
///     .build()?;
/// assert_eq!(settings.pair_count(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct SettingsBuilder {
    root: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    languages: Option<Vec<Language>>,
    tools: Vec<ToolDescriptor>,
    assets: AssetPaths,
    generated_on: Option<NaiveDate>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Builder preloaded with the built-in tools.
    pub fn builtin() -> Self {
        Self::new().tools(builtin_tools())
    }

    /// Sets the directory input paths are resolved against.
    pub fn root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory archives are written to.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the languages to build, in iteration order.
    pub fn languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = Some(languages);
        self
    }

    /// Replaces the tool list.
    pub fn tools(mut self, tools: Vec<ToolDescriptor>) -> Self {
        self.tools = tools;
        self
    }

    /// Appends one tool.
    pub fn tool(mut self, tool: ToolDescriptor) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn assets(mut self, assets: AssetPaths) -> Self {
        self.assets = assets;
        self
    }

    /// Fixes the date printed in the offline banner.
    ///
    /// Default: today (local time)
    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// Validates and builds the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] if:
    /// - no language or no tool is configured, or a language is repeated
    /// - a tool id is empty, not a lowercase slug, or duplicated
    /// - a tool lacks a name, title or template for a configured language
    pub fn build(self) -> Result<Settings> {
        let languages = self.languages.unwrap_or_else(|| Language::ALL.to_vec());
        if languages.is_empty() {
            return Err(invalid("at least one language is required"));
        }
        let mut seen_languages = HashSet::new();
        for language in &languages {
            if !seen_languages.insert(*language) {
                return Err(invalid(format!("language {language} listed twice")));
            }
        }

        if self.tools.is_empty() {
            return Err(invalid("at least one tool is required"));
        }

        let mut seen_ids = HashSet::new();
        for tool in &self.tools {
            validate_tool(tool, &languages)?;
            if !seen_ids.insert(tool.id()) {
                return Err(invalid(format!("duplicate tool id {}", tool.id())));
            }
        }

        let generated_on = self
            .generated_on
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        log::debug!(
            "Settings: {} tools x {} languages, generated on {}",
            self.tools.len(),
            languages.len(),
            generated_on
        );

        Ok(Settings::new(
            self.root.unwrap_or_else(|| PathBuf::from(".")),
            self.output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            languages,
            self.tools,
            self.assets,
            generated_on,
        ))
    }
}

fn validate_tool(tool: &ToolDescriptor, languages: &[Language]) -> Result<()> {
    let id = tool.id();
    let is_slug = !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !is_slug {
        return Err(invalid(format!(
            "tool id {id:?} must be a non-empty lowercase slug (a-z, 0-9, -)"
        )));
    }

    for language in languages {
        if tool.name(*language).is_none() {
            return Err(invalid(format!("tool {id} has no name for {language}")));
        }
        if tool.title(*language).is_none() {
            return Err(invalid(format!("tool {id} has no title for {language}")));
        }
        if tool.template(*language).is_none() {
            return Err(invalid(format!("tool {id} has no template for {language}")));
        }
    }

    if let Some(extra) = tool.languages().find(|l| !languages.contains(l)) {
        log::debug!("Tool {id} has entries for unconfigured language {extra}; ignoring them");
    }

    Ok(())
}

fn invalid(reason: impl Into<String>) -> Error {
    Error::InvalidSettings(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: &str) -> ToolDescriptor {
        ToolDescriptor::new(id)
            .localized(Language::De, "Name", "Titel", format!("{id}/index.html"))
            .localized(Language::Fr, "Nom", "Titre", format!("fr/{id}/index.html"))
    }

    #[test]
    fn builtin_defaults() {
        let settings = SettingsBuilder::builtin().build().unwrap();
        assert_eq!(settings.root(), Path::new("."));
        assert_eq!(settings.output_dir(), Path::new(DEFAULT_OUTPUT_DIR));
        assert_eq!(settings.languages(), &[Language::De, Language::Fr]);
        let ids: Vec<_> = settings.tools().iter().map(|t| t.id()).collect();
        assert_eq!(ids, ["verzugszins", "zinseszins"]);
        assert_eq!(settings.pair_count(), 4);
        assert_eq!(settings.tools()[0].script_paths().len(), 4);
    }

    #[test]
    fn rejects_empty_lists() {
        assert!(matches!(
            SettingsBuilder::new().build(),
            Err(Error::InvalidSettings(msg)) if msg.contains("tool")
        ));
        assert!(matches!(
            SettingsBuilder::builtin().languages(vec![]).build(),
            Err(Error::InvalidSettings(msg)) if msg.contains("language")
        ));
        assert!(
            SettingsBuilder::builtin()
                .languages(vec![Language::De, Language::De])
                .build()
                .is_err()
        );
    }

    #[test]
    fn rejects_bad_and_duplicate_ids() {
        for id in ["", "Verzug", "zins rechner", "-zins", "zins_1"] {
            assert!(SettingsBuilder::new().tool(tool(id)).build().is_err(), "{id:?}");
        }
        let err = SettingsBuilder::new()
            .tools(vec![tool("zins"), tool("zins")])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate tool id zins"));
    }

    #[test]
    fn requires_every_language() {
        let de_only =
            ToolDescriptor::new("zins").localized(Language::De, "Name", "Titel", "zins.html");
        let err = SettingsBuilder::new().tool(de_only.clone()).build().unwrap_err();
        assert!(err.to_string().contains("no name for fr"));

        let settings = SettingsBuilder::new()
            .tool(de_only)
            .languages(vec![Language::De])
            .build()
            .unwrap();
        assert_eq!(settings.pair_count(), 1);
    }

    #[test]
    fn keeps_fixed_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let settings = SettingsBuilder::builtin().generated_on(date).build().unwrap();
        assert_eq!(settings.generated_on(), date);
    }
}
